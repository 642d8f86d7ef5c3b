//! Laurel runtime library.
//!
//! Provides the native support functions required by compiled Laurel
//! programs:
//! - Console output (`_puti`, `_putc`, `_puts`)
//! - Console input (`_geti`, `_getc`, `_gets`)
//! - Scalar conversions (`_abs`, `_ord`, `_chr`)
//! - NUL-terminated string operations (`_strlen`, `_strcmp`, `_strcpy`,
//!   `_strcat`)
//!
//! Generated code binds to these by exact link-time name; see [`abi`] for
//! the full symbol table and the alternate `bare_symbols` naming regime.
//!
//! Every entry point is an independent, stateless adapter over one host
//! operation. The library keeps no cross-call state and owns no memory
//! beyond the caller-provided buffers.

pub mod abi;
pub mod console;
pub mod cstr;
pub mod scalar;
