//! CSV export.
//!
//! UTF-8, comma separated, `\n` line endings, header row first. Fields are
//! quoted only when they contain a comma, quote or newline.

use csv::{Terminator, WriterBuilder};
use estoque_core::{Product, REPORT_HEADERS};
use tracing::debug;

use crate::error::{ExportError, ExportResult};

/// Encodes products as a CSV document, in list order.
pub fn encode_csv(products: &[Product]) -> ExportResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADERS)?;

    for product in products {
        let quantity = product.quantity.to_string();
        writer.write_record([product.code.as_str(), product.name.as_str(), quantity.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvFlush(e.to_string()))?;

    debug!(rows = products.len(), bytes = bytes.len(), "CSV encoded");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_product() {
        let bytes = encode_csv(&[Product::new("P00001", "Widget", 10)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Código,Nome,Quantidade", "P00001,Widget,10"]);
    }

    #[test]
    fn test_empty_list_has_header_only() {
        let bytes = encode_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Código,Nome,Quantidade\n");
    }

    #[test]
    fn test_names_with_separators_survive_parsing() {
        let products = vec![
            Product::new("P00001", "Cabo flexível 2,5mm", 3),
            Product::new("P00002", "Tubo \"PVC\" 20mm", 0),
        ];
        let bytes = encode_csv(&products).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), REPORT_HEADERS.to_vec());

        let parsed: Vec<Product> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                Product::new(&r[0], &r[1], r[2].parse().unwrap())
            })
            .collect();
        assert_eq!(parsed, products);
    }
}
