//! Loading tests: encoding fallbacks and parse recovery.

mod tests_recovery;
