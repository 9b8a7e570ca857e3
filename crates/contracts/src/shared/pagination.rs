use serde::{Deserialize, Serialize};

/// Размер страницы задаётся сервером, клиент считает его константой
pub const PAGE_SIZE: usize = 10;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize) -> Self {
        Self {
            page,
            size: PAGE_SIZE,
        }
    }
}
