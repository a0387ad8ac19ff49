pub mod taylor;
