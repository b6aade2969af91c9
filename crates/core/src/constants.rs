/// Page returned when the client does not ask for one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client does not provide a valid one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Upper bound for a single page
pub const MAX_PAGE_SIZE: u32 = 100;
