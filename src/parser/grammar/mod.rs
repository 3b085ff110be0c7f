//! Grammar-driven nonterminals, one module per C++ construct.

pub mod class_;
pub mod declaration;
pub mod declarator;
pub mod expression;
pub mod namespace;
pub mod statement;
pub mod template;
pub mod translation_unit;
