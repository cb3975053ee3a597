//! Golden selector cases
//!
//! Worked examples of complete chains and the text they must produce, plus the
//! misuse patterns each error variant is raised for.
