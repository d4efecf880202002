//! # blueprint
//!
//! A parser for the blueprint definition format.
//!
//! Blueprint is a line-oriented, indentation-sensitive language for sketching the
//! shape of a software system: modules, classes, functions, variables and the
//! behavior blocks inside them. The parser turns a source file into a validated
//! AST while collecting *every* structural and semantic problem it finds in a
//! single pass, instead of stopping at the first one.
//!
//! File Layout
//!
//! The library follows a staged layout under `src/blueprint`:
//!   - `lexing`       Line classification (empty / comment / annotation / structural)
//!   - `building`     Node construction from classified lines
//!   - `ast`          The node model, attachment grammar and serializable snapshot
//!   - `symbols`      The scope-stack symbol table
//!   - `parsing`      The analyzer: indentation walk, validation and recovery
//!   - `diagnostics`  Line-numbered, severity-tagged diagnostics
//!   - `formats`      Tree / JSON / YAML renderings of a parsed blueprint
//!
//! For testing guidelines see the [testing module](blueprint::testing): tests use
//! the verified sample sources collected there rather than ad-hoc strings.

pub mod blueprint;
