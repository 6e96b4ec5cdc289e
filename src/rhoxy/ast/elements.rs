//! AST node definitions, one module per node kind

pub mod bundle;
pub mod ground;
pub mod join;
pub mod new;
pub mod output;
pub mod par;
pub mod process;
pub mod variable;

pub use bundle::Bundle;
pub use ground::Ground;
pub use join::{Action, Join, Pattern};
pub use new::New;
pub use output::Output;
pub use par::Par;
pub use process::Proc;
pub use variable::{Variable, VariableP};
