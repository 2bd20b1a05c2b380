//! Page arithmetic for catalog listings

use crate::error::{AppError, AppResult};

/// Rows per catalog page
pub const PAGE_SIZE: u64 = 10;

/// Parse a page path segment. Only plain positive decimal integers are pages.
pub fn parse_page_token(token: &str) -> AppResult<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidPageToken(token.to_string()));
    }
    match token.parse::<u64>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(AppError::InvalidPageToken(token.to_string())),
    }
}

/// Number of rows to skip for a 1-based page number
pub fn compute_offset(page_number: u64, page_size: u64) -> u64 {
    page_size.saturating_mul(page_number.saturating_sub(1))
}

/// Total pages for a result set; never less than one.
pub fn compute_total_pages(total_count: u64, page_size: u64) -> u64 {
    if total_count >= page_size {
        total_count.div_ceil(page_size)
    } else {
        1
    }
}

pub fn is_page_out_of_range(page_number: u64, total_pages: u64) -> bool {
    page_number > total_pages
}
