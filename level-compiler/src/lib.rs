use std::{error::Error, path::Path};

use proc_macro2::TokenStream;
use quote::quote;
use util::Row;

mod parse;

pub use parse::{parse_level, LevelError};

/// Reads a text level and returns Rust source defining `ROWS`.
///
/// The generated code expects `Cell` and `Row` to be in scope.
pub fn compile_level(path: impl AsRef<Path>) -> Result<String, Box<dyn Error>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let rows = parse_level(&source)?;

    log::debug!("{}: {} rows", path.display(), rows.len());

    Ok(rows_to_tokens(&rows).to_string())
}

pub fn rows_to_tokens(rows: &[Row]) -> TokenStream {
    let rows = rows.iter().map(|row| {
        let cells = row.iter().map(|cell| {
            let packed = cell.to_packed();
            quote! { Cell::from_packed(#packed) }
        });
        quote! { [#(#cells),*] }
    });

    quote! {
        pub static ROWS: &[Row] = &[#(#rows),*];
    }
}
