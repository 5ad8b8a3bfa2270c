//! # Stock Adjustment Messages
//!
//! Turns an [`Adjustment`] into the sentence shown under the form.
//!
//! ## Two Flows, Two Wordings
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /baixa (manual, always a decrement)                                   │
//! │    Applied     → 🟢 Baixa realizada: Widget agora tem 9 unidades.      │
//! │    OutOfStock  → ⚠️ Estoque zerado: Widget não possui unidades ...     │
//! │    NotFound    → ❌ Produto não encontrado.                            │
//! │                                                                         │
//! │  /scanner (camera, entrada or saida)                                   │
//! │    Applied     → 📥 Entrada registrada: Widget → 11                    │
//! │                  📤 Saída registrada: Widget → 9                       │
//! │    OutOfStock  → ⚠️ Estoque zerado: Widget não pode ter saída.         │
//! │    NotFound    → ❌ Produto com código P00042 não encontrado.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text is plain; the templates escape it on output.

use crate::types::{Adjustment, StockOperation};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    /// Bootstrap alert class for this level.
    pub const fn css_class(&self) -> &'static str {
        match self {
            MessageLevel::Success => "alert-success",
            MessageLevel::Warning => "alert-warning",
            MessageLevel::Error => "alert-danger",
        }
    }
}

/// A message rendered under a form after a POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl StatusMessage {
    fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        StatusMessage {
            level,
            text: text.into(),
        }
    }

    /// Bootstrap alert class, for templates.
    pub fn css_class(&self) -> &'static str {
        self.level.css_class()
    }
}

/// Message for the manual decrement page.
pub fn baixa_message(outcome: &Adjustment) -> StatusMessage {
    match outcome {
        Adjustment::Applied { product } => StatusMessage::new(
            MessageLevel::Success,
            format!(
                "🟢 Baixa realizada: {} agora tem {} unidades.",
                product.name, product.quantity
            ),
        ),
        Adjustment::OutOfStock { product } => StatusMessage::new(
            MessageLevel::Warning,
            format!(
                "⚠️ Estoque zerado: {} não possui unidades disponíveis.",
                product.name
            ),
        ),
        Adjustment::NotFound { .. } => {
            StatusMessage::new(MessageLevel::Error, "❌ Produto não encontrado.")
        }
    }
}

/// Message for the camera scanner page.
pub fn scanner_message(operation: StockOperation, outcome: &Adjustment) -> StatusMessage {
    match outcome {
        Adjustment::Applied { product } => {
            let text = match operation {
                StockOperation::Entrada => {
                    format!("📥 Entrada registrada: {} → {}", product.name, product.quantity)
                }
                StockOperation::Saida => {
                    format!("📤 Saída registrada: {} → {}", product.name, product.quantity)
                }
            };
            StatusMessage::new(MessageLevel::Success, text)
        }
        Adjustment::OutOfStock { product } => StatusMessage::new(
            MessageLevel::Warning,
            format!("⚠️ Estoque zerado: {} não pode ter saída.", product.name),
        ),
        Adjustment::NotFound { code } => StatusMessage::new(
            MessageLevel::Error,
            format!("❌ Produto com código {} não encontrado.", code),
        ),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn widget(quantity: i64) -> Product {
        Product::new("P00001", "Widget", quantity)
    }

    #[test]
    fn test_baixa_messages() {
        let msg = baixa_message(&Adjustment::Applied { product: widget(9) });
        assert_eq!(msg.level, MessageLevel::Success);
        assert_eq!(msg.text, "🟢 Baixa realizada: Widget agora tem 9 unidades.");

        let msg = baixa_message(&Adjustment::OutOfStock { product: widget(0) });
        assert_eq!(msg.level, MessageLevel::Warning);
        assert_eq!(
            msg.text,
            "⚠️ Estoque zerado: Widget não possui unidades disponíveis."
        );

        let msg = baixa_message(&Adjustment::NotFound {
            code: "P99999".to_string(),
        });
        assert_eq!(msg.level, MessageLevel::Error);
        assert_eq!(msg.text, "❌ Produto não encontrado.");
    }

    #[test]
    fn test_scanner_messages() {
        let msg = scanner_message(
            StockOperation::Entrada,
            &Adjustment::Applied { product: widget(6) },
        );
        assert_eq!(msg.text, "📥 Entrada registrada: Widget → 6");

        let msg = scanner_message(
            StockOperation::Saida,
            &Adjustment::Applied { product: widget(4) },
        );
        assert_eq!(msg.text, "📤 Saída registrada: Widget → 4");

        let msg = scanner_message(
            StockOperation::Saida,
            &Adjustment::OutOfStock { product: widget(0) },
        );
        assert_eq!(msg.level, MessageLevel::Warning);
        assert_eq!(msg.text, "⚠️ Estoque zerado: Widget não pode ter saída.");

        let msg = scanner_message(
            StockOperation::Entrada,
            &Adjustment::NotFound {
                code: "P00042".to_string(),
            },
        );
        assert_eq!(msg.css_class(), "alert-danger");
        assert_eq!(msg.text, "❌ Produto com código P00042 não encontrado.");
    }
}
