use std::path::Path;
use thiserror::Error;

use crate::domain::entities::directory_row::DirectoryRow;
use crate::infrastructure::filesystem::directory_scanner::{DirectoryScanner, ScannedDirectory};
use crate::infrastructure::scm::git_scm::GitScm;
use crate::infrastructure::scm::scm_interface::ScmStatusProbe;

/// StatusReport関連のエラー
#[derive(Debug, Error)]
pub enum StatusReportError {
    #[error("Failed to scan directory '{path}': {error}")]
    ScanFailed { path: String, error: String },

    #[error("Git status check failed for '{directory}': {error}")]
    GitStatusFailed { directory: String, error: String },
}

/// ステータスレポートの設定
#[derive(Debug, Clone, Default)]
pub struct StatusReportConfig {
    /// 使用するgit実行ファイル（Noneの場合はPATH上の`git`）
    pub git_executable: Option<String>,

    /// 詳細ログを出力するか
    pub verbose: bool,
}

/// 全体のレポート結果
///
/// 行はディレクトリ一覧が返した順序のまま保持される。
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// 各子ディレクトリの行
    pub rows: Vec<DirectoryRow>,

    /// gitリポジトリの数
    pub repository_count: usize,

    /// 未コミットの変更があるリポジトリの数
    pub dirty_count: usize,

    /// gitリポジトリではないディレクトリの数
    pub not_repo_count: usize,
}

impl StatusReport {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            repository_count: 0,
            dirty_count: 0,
            not_repo_count: 0,
        }
    }

    /// 行を追加し、集計を更新する
    pub fn add_row(&mut self, row: DirectoryRow) {
        if row.is_repository() {
            self.repository_count += 1;
            if row.is_dirty() {
                self.dirty_count += 1;
            }
        } else {
            self.not_repo_count += 1;
        }
        self.rows.push(row);
    }

    /// 合計ディレクトリ数
    pub fn total_count(&self) -> usize {
        self.rows.len()
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::new()
    }
}

/// ステータスレポートのユースケース
///
/// スキャン、プローブ、集計を1回の呼び出しで順番に実行する。プローブの
/// 失敗は即座に全体を中断する（部分的なレポートは返さない）。
pub struct StatusReportUseCase {
    config: StatusReportConfig,
    scanner: DirectoryScanner,
    probe: Box<dyn ScmStatusProbe>,
}

impl StatusReportUseCase {
    /// 新しいStatusReportUseCaseインスタンスを作成
    pub fn new(config: StatusReportConfig) -> Self {
        let probe: Box<dyn ScmStatusProbe> = match &config.git_executable {
            Some(executable) => Box::new(GitScm::with_executable(executable.clone())),
            None => Box::new(GitScm::new()),
        };

        Self {
            config,
            scanner: DirectoryScanner::new(),
            probe,
        }
    }

    /// プローブ実装を差し替えてインスタンスを作成
    pub fn with_probe(config: StatusReportConfig, probe: Box<dyn ScmStatusProbe>) -> Self {
        Self {
            config,
            scanner: DirectoryScanner::new(),
            probe,
        }
    }

    /// レポートを実行
    pub async fn execute(&self, base_dir: &Path) -> Result<StatusReport, StatusReportError> {
        // 1. 直下の子ディレクトリを列挙
        let directories =
            self.scanner
                .scan(base_dir)
                .map_err(|e| StatusReportError::ScanFailed {
                    path: base_dir.display().to_string(),
                    error: e.to_string(),
                })?;

        // 2. 各ディレクトリを順番にプローブ
        let mut report = StatusReport::new();
        for directory in directories {
            let row = self.check_directory(&directory).await?;
            report.add_row(row);
        }

        if self.config.verbose {
            tracing::debug!(
                "Checked {} directories: {} repositories ({} dirty), {} not repositories",
                report.total_count(),
                report.repository_count,
                report.dirty_count,
                report.not_repo_count
            );
        }

        Ok(report)
    }

    /// 単一ディレクトリの行を作成
    async fn check_directory(
        &self,
        directory: &ScannedDirectory,
    ) -> Result<DirectoryRow, StatusReportError> {
        // gitマーカーが無ければプローブは実行しない
        if !self.probe.is_repository(&directory.path) {
            return Ok(DirectoryRow::not_repo(directory.name.clone()));
        }

        if self.config.verbose {
            tracing::debug!("Checking status for {}", directory.path.display());
        }

        match self.probe.status(&directory.path).await {
            Ok(status) => Ok(DirectoryRow::repo(
                directory.name.clone(),
                status.branch,
                status.has_changes,
            )),
            Err(e) => Err(StatusReportError::GitStatusFailed {
                directory: directory.name.clone(),
                error: e.to_string(),
            }),
        }
    }
}
