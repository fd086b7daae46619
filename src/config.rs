use crate::error::{ReportError, Result};
use prospect_report_common::registry::{
    self, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use prospect_report_common::{CompanyRecord, KeywordGroup, VerticalInfo};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 実行設定（ファイルにない項目は組み込み既定値）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub concurrency: usize,
    pub output: PathBuf,
    pub companies: Vec<CompanyRecord>,
    pub keywords: Vec<KeywordGroup>,
    pub verticals: VerticalInfo,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.into(),
            concurrency: 1,
            output: PathBuf::from(DEFAULT_OUTPUT),
            companies: registry::default_companies(),
            keywords: registry::default_keywords(),
            verticals: registry::default_verticals(),
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// 明示パス > ~/.config/prospect-report/config.json > 組み込み既定値
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ReportError::FileNotFound(path.display().to_string()));
            }
            return Self::from_file(path);
        }

        match Self::config_path() {
            Ok(config_path) if config_path.exists() => Self::from_file(&config_path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("prospect-report").join("config.json"))
    }

    /// CLI指定で上書き
    pub fn apply_overrides(
        &mut self,
        timeout: Option<u64>,
        concurrency: Option<usize>,
        output: Option<PathBuf>,
    ) {
        if let Some(t) = timeout {
            self.timeout_seconds = t;
        }
        if let Some(c) = concurrency {
            self.concurrency = c;
        }
        if let Some(o) = output {
            self.output = o;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(ReportError::Config("timeout_seconds は1以上を指定してください".into()));
        }
        if self.concurrency == 0 {
            return Err(ReportError::Config("concurrency は1以上を指定してください".into()));
        }
        registry::validate(&self.companies, &self.keywords)?;
        Ok(())
    }

    pub fn group_names(&self) -> Vec<String> {
        self.keywords.iter().map(|g| g.name.clone()).collect()
    }
}
