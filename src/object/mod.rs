//! Tagged word encoding of heap numeric objects.

pub mod object;

pub use object::{kind_name, mat_entry, tag, view, ObjView, Tag};
pub(crate) use object::{
    set_mat_cell, set_padic_parts, write_frac, write_int, write_mat_shell, write_padic_shell,
};
