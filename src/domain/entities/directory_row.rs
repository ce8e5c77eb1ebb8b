/// gitリポジトリではないディレクトリのブランチ欄に使用するセンチネル文字列
pub const NOT_A_REPO: &str = "<not repo>";

/// ブランチ行を解析できなかった場合のセンチネル文字列
pub const UNKNOWN_BRANCH: &str = "(unknown)";

/// 未コミットの変更があるリポジトリのステータス欄に使用する文字列
pub const STATUS_CHANGED: &str = "changed";

/// スキャン対象の子ディレクトリ1件に対応する行エンティティ
///
/// 構築後は不変。スキャン対象の直下の子ディレクトリごとに必ず1件存在し、
/// 行の順序はディレクトリ一覧が返した順序と一致する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    /// 子ディレクトリのベース名
    pub name: String,

    /// 検出されたブランチ名、またはセンチネル文字列
    pub branch: String,

    /// 空文字列（クリーンまたは対象外）、または`"changed"`
    pub status: String,
}

impl DirectoryRow {
    /// gitリポジトリではないディレクトリの行を作成
    pub fn not_repo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branch: NOT_A_REPO.to_string(),
            status: String::new(),
        }
    }

    /// gitリポジトリの行を作成
    ///
    /// ブランチ名が解析できなかった場合は`UNKNOWN_BRANCH`で埋める。
    pub fn repo(name: impl Into<String>, branch: Option<String>, dirty: bool) -> Self {
        Self {
            name: name.into(),
            branch: branch.unwrap_or_else(|| UNKNOWN_BRANCH.to_string()),
            status: if dirty {
                STATUS_CHANGED.to_string()
            } else {
                String::new()
            },
        }
    }

    /// gitリポジトリの行かどうか
    pub fn is_repository(&self) -> bool {
        self.branch != NOT_A_REPO
    }

    /// 未コミットの変更がある行かどうか
    pub fn is_dirty(&self) -> bool {
        self.status == STATUS_CHANGED
    }
}
