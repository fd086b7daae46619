use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prospect-report")]
#[command(about = "企業サイトのキーワード走査による見込み客レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 全社のサイトを取得してExcelレポートを出力
    Run {
        /// 設定ファイル（JSON）
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 1リクエストのタイムアウト（秒）
        #[arg(short, long)]
        timeout: Option<u64>,

        /// 同時取得数（1 = 逐次）
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,

        /// プログレスバーを表示しない
        #[arg(short, long)]
        quiet: bool,
    },

    /// 1つのURLを取得してキーワード判定結果を表示
    Check {
        /// 対象URL
        #[arg(required = true)]
        url: String,

        /// 設定ファイル（JSON）
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// タイムアウト（秒）
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定ファイル（JSON）
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 有効な設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の設定ファイルを書き出す
        #[arg(long)]
        init: bool,

        /// 既存の設定ファイルを上書き
        #[arg(long, requires = "init")]
        force: bool,
    },
}
