//! The three demo applications, each as a ready-to-serve [`Router`](crate::Router).
//!
//! | App | Routes |
//! |---|---|
//! | [`contact`] | `/` |
//! | [`logged`] | `/foo`, `/bar` |
//! | [`books`] | `/books/{title}/page/{page}` |

pub mod books;
pub mod contact;
pub mod logged;
