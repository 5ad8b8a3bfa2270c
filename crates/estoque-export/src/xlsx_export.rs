//! XLSX export.
//!
//! One worksheet named `Estoque`:
//!
//! ```text
//!        A          B            C
//!   1  Código     Nome         Quantidade     ← bold header
//!   2  P00001     Widget       10             ← quantity is a number cell
//!   3  P00002     Gadget       0
//! ```

use estoque_core::{Product, REPORT_HEADERS};
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::error::ExportResult;

/// Worksheet name inside the workbook.
pub const SHEET_NAME: &str = "Estoque";

/// Encodes products as an XLSX workbook, in list order.
pub fn encode_xlsx(products: &[Product]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, title) in REPORT_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (i, product) in products.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, product.code.as_str())?;
            sheet.write_string(row, 1, product.name.as_str())?;
            sheet.write_number(row, 2, product.quantity as f64)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;

    debug!(rows = products.len(), bytes = bytes.len(), "XLSX encoded");
    Ok(bytes)
}
