//! # Site Content
//!
//! Compiled-in content shared by every surface of the site.
//! This crate holds data only: no I/O, no parsing, no validation.
//!
//! ```rust
//! use site_content::config;
//!
//! let brand = config();
//! assert_eq!(brand.company_name, "Figma");
//! assert_eq!(brand.url, "https://figma.com");
//! ```

pub mod brand;

pub use brand::{BrandConfig, CONFIG, config};
