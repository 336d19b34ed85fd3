//! Extraction tests
//!
//! End-to-end checks of the extracted model:
//! - Entity counts and memberships for small native exports
//! - Link-back independence from document order
//! - XMI exports with undeclared prefixes
//! - Diagram payload detection

mod tests_images;
mod tests_link_back;
mod tests_native;
