//! Rule implementations for tsctl.
//!
//! Each rule is a pure function over one parsed catalog that returns its own
//! issue type, plus a `check_*_issues` wrapper that runs it over every catalog
//! of a `CheckContext`.
//!
//! ## Module Structure
//!
//! - `placeholder`: Translations whose `%1`-style tokens differ from the source
//! - `duplicate`: Repeated source text within one context
//! - `unfinished`: Empty or unconfirmed translations
//! - `untranslated`: Translations identical to the source text
//! - `obsolete`: Obsolete and vanished messages kept as translator memory

pub mod duplicate;
pub mod obsolete;
pub mod placeholder;
pub mod unfinished;
pub mod untranslated;
