use anyhow::Context;
use clap::Parser;
use prospect_report::{cli, config, export, fetcher, pipeline};
use prospect_report_common::{match_keywords, yes_no, ReportSummary, ScrapeOutcome};
use prospect_report_common::registry::DEFAULT_OUTPUT;
use cli::{Cli, Commands};
use config::Config;
use fetcher::SiteFetcher;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { config, output, timeout, concurrency, quiet } => {
            println!("📊 prospect-report - レポート生成\n");

            let mut config = Config::load(config.as_deref())?;
            config.apply_overrides(timeout, concurrency, output);
            config.validate()?;

            // 1. 取得・判定
            println!(
                "[1/2] {}社のサイトを取得中... (タイムアウト{}秒, 同時{}件)",
                config.companies.len(),
                config.timeout_seconds,
                config.concurrency
            );
            let fetcher = SiteFetcher::new(config.timeout_seconds, &config.user_agent)?;
            let progress = pipeline::progress_bar(config.companies.len(), !quiet);
            let rows = pipeline::classify_all(
                &fetcher,
                &config.companies,
                &config.keywords,
                &config.verticals,
                config.concurrency,
                &progress,
            )
            .await;
            progress.finish_and_clear();

            let summary = ReportSummary::from_rows(&rows);
            println!(
                "✔ {}社を判定 (取得失敗 {}社, Prospect {}社)\n",
                summary.companies, summary.fetch_failures, summary.prospects
            );

            // 2. 出力
            println!("[2/2] Excelを出力中...");
            let report = pipeline::build_report(&rows, &config.keywords);
            let output_path = export::output_path(&config.output, DEFAULT_OUTPUT);
            export::export_report(&report, &output_path)
                .with_context(|| format!("出力に失敗: {}", output_path.display()))?;

            println!("\n✅ Data saved to {}", output_path.display());
        }

        Commands::Check { url, config, timeout } => {
            let mut config = Config::load(config.as_deref())?;
            config.apply_overrides(timeout, None, None);
            config.validate()?;

            let fetcher = SiteFetcher::new(config.timeout_seconds, &config.user_agent)?;
            match fetcher.fetch(&url).await {
                ScrapeOutcome::Success(text) => {
                    println!("✔ {} ({} chars)", url, text.len());
                    let presence = match_keywords(&text, &config.keywords);
                    for (name, present) in presence.iter() {
                        println!("  {}: {}", name, yes_no(present));
                    }
                }
                ScrapeOutcome::Failure(reason) => {
                    println!("✘ {}: {}", url, reason);
                }
            }
        }

        Commands::Config { config, show, init, force } => {
            if init {
                let path = match config.clone() {
                    Some(p) => p,
                    None => Config::config_path()?,
                };
                if path.exists() && !force {
                    println!("設定ファイルが既に存在します: {} (--force で上書き)", path.display());
                } else {
                    Config::default().save(&path)?;
                    println!("✔ 設定ファイルを作成しました: {}", path.display());
                }
            }

            if show || !init {
                let config = Config::load(config.as_deref())?;
                println!("設定:");
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  同時取得数: {}", config.concurrency);
                println!("  出力: {}", config.output.display());
                println!("  企業数: {}", config.companies.len());
                println!("  キーワードグループ: {}", config.group_names().join(", "));
                println!("  業種:");
                for (category, explanation) in config.verticals.iter() {
                    println!("    {}: {}", category, explanation);
                }
            }
        }
    }

    Ok(())
}
