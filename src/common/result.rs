use crate::common::error::LsreposError;

/// lsreposプロジェクト全体で使用するResult型のエイリアス
///
/// このエイリアスにより、プロジェクト全体で一貫したエラーハンドリングが可能になる。
///
/// # Examples
///
/// ```
/// use lsrepos::common::result::LsreposResult;
/// use lsrepos::common::error::LsreposError;
///
/// fn example_function() -> LsreposResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> LsreposResult<()> {
///     Err(LsreposError::internal_error("Something went wrong"))
/// }
/// ```
pub type LsreposResult<T> = Result<T, LsreposError>;

/// Resultのエラー変換ヘルパー
///
/// 標準のResult型をLsreposResultに変換するためのヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてLsreposResultに変換
    ///
    /// # Arguments
    ///
    /// * `message` - エラーメッセージ
    /// * `path` - 失敗したパス
    ///
    /// # Examples
    ///
    /// ```
    /// use lsrepos::common::result::{LsreposResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let lsrepos_result: LsreposResult<String> =
    ///     result.with_filesystem_error("File operation failed", None);
    /// assert!(lsrepos_result.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> LsreposResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> LsreposResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| {
            let io_error = e.into();
            LsreposError::filesystem_error_with_source(message, path, io_error)
        })
    }
}
