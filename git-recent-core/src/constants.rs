/// Rows shown in one page of the branch list
pub const DEFAULT_PAGE_SIZE: usize = 10;
