#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub branch: String,
    /// Modified plus untracked paths from `git status --porcelain`.
    pub dirty_files: usize,
}
