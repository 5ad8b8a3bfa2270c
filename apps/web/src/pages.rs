//! # HTML Pages
//!
//! Every page is a function returning [`Markup`], wrapped by [`layout`].
//! Interpolated values (`(expr)`) are HTML-escaped by maud, so product
//! names and search terms are always inert text.
//!
//! ```text
//!   handler ──► pages::relatorio(&products, &busca) ──► Markup
//!                                                          │
//!                                     into_response() ◄────┘  Html<String>
//! ```

use axum::response::Html;
use estoque_core::{Product, StatusMessage, StockOperation};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const QUAGGA_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/quagga/0.12.1/quagga.min.js";

/// Converts page markup into an axum HTML body.
pub fn into_response(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

/// Common document shell.
fn layout(title: &str, centered: bool, extra_head: Option<Markup>, content: Markup) -> Markup {
    let body_class = if centered {
        "container py-4 text-center"
    } else {
        "container py-4"
    };

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link href=(BOOTSTRAP_CSS) rel="stylesheet";
                @if let Some(extra) = extra_head {
                    (extra)
                }
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

fn status_line(id: &str, message: Option<&StatusMessage>) -> Markup {
    html! {
        @if let Some(message) = message {
            div id=(id) class=(format!("mt-4 fw-bold alert {}", message.css_class())) {
                (message.text)
            }
        }
    }
}

fn back_links() -> Markup {
    html! {
        hr;
        a href="/cadastro" class="btn btn-outline-primary me-2" { "← Voltar ao Cadastro" }
        a href="/relatorio" class="btn btn-outline-secondary" { "📊 Ver Relatório" }
    }
}

// =============================================================================
// Cadastro
// =============================================================================

pub fn cadastro() -> Markup {
    layout(
        "Cadastro",
        false,
        None,
        html! {
            h2 class="mb-4" { "📋 Cadastro de Produto" }
            form method="POST" action="/cadastro" class="row g-3" {
                div class="col-md-6" {
                    label.form-label for="nome" { "Nome:" }
                    input type="text" id="nome" name="nome" class="form-control" required;
                }
                div class="col-md-6" {
                    label.form-label for="quantidade" { "Quantidade:" }
                    input type="number" id="quantidade" name="quantidade" class="form-control" min="0" required;
                }
                div class="col-12" {
                    button type="submit" class="btn btn-primary" { "Cadastrar" }
                }
            }
            hr;
            p {
                a href="/relatorio" class="btn btn-outline-info me-2" { "📊 Ver Relatório" }
                a href="/scanner" class="btn btn-outline-success me-2" { "📲 Escanear Produto" }
                a href="/baixa" class="btn btn-outline-danger" { "📦 Registrar Saída" }
            }
        },
    )
}

/// Shown after a successful registration.
pub fn confirmacao(product: &Product, image_path: &str, image_url: &str) -> Markup {
    layout(
        "Confirmação",
        false,
        None,
        html! {
            h2 { "✅ Produto Cadastrado" }
            ul class="list-group mb-3" {
                li.list-group-item { strong { "Nome:" } " " (product.name) }
                li.list-group-item { strong { "Código gerado:" } " " (product.code) }
                li.list-group-item { strong { "Quantidade:" } " " (product.quantity) }
                li.list-group-item { strong { "Imagem:" } " " (image_path) }
            }
            p {
                img src=(image_url) alt=(format!("Código de barras {}", product.code)) class="border p-2";
            }
            a href="/cadastro" class="btn btn-outline-primary me-2" { "← Cadastrar outro" }
            a href="/relatorio" class="btn btn-outline-info" { "📊 Ver Relatório" }
        },
    )
}

// =============================================================================
// Relatório
// =============================================================================

/// Product table. `busca` is echoed back into the search box.
pub fn relatorio(products: &[Product], busca: &str) -> Markup {
    layout(
        "Relatório",
        false,
        None,
        html! {
            h2 { "📊 Relatório de Estoque" }
            form method="GET" action="/relatorio" class="row g-3 mb-4" {
                div class="col-md-6" {
                    input type="text" name="busca" class="form-control"
                        placeholder="🔍 Buscar por nome ou código" value=(busca);
                }
                div class="col-md-6" {
                    button type="submit" class="btn btn-outline-primary" { "Buscar" }
                    a href="/relatorio" class="btn btn-link" { "Limpar" }
                }
            }
            table.table.table-striped {
                thead {
                    tr { th { "Código" } th { "Nome" } th { "Quantidade" } }
                }
                tbody {
                    @for product in products {
                        tr {
                            td { (product.code) }
                            td { (product.name) }
                            td { (product.quantity) }
                        }
                    }
                }
            }
            p {
                a href="/export/csv" class="btn btn-outline-secondary me-2" { "⬇️ Exportar CSV" }
                a href="/export/xlsx" class="btn btn-outline-secondary" { "⬇️ Exportar XLSX" }
            }
            a href="/cadastro" class="btn btn-link" { "← Voltar ao cadastro" }
        },
    )
}

// =============================================================================
// Baixa
// =============================================================================

pub fn baixa(message: Option<&StatusMessage>) -> Markup {
    layout(
        "Baixa de Estoque",
        false,
        None,
        html! {
            h2 { "📦 Registrar Saída de Produto" }
            form method="POST" action="/baixa" class="row g-3" {
                div class="col-md-6" {
                    label.form-label for="codigo" { "Código do produto:" }
                    input type="text" id="codigo" name="codigo" class="form-control" required autofocus;
                }
                div class="col-md-6 align-self-end" {
                    button type="submit" class="btn btn-danger" { "Registrar Baixa" }
                }
            }
            (status_line("msg", message))
            (back_links())
        },
    )
}

// =============================================================================
// Scanner
// =============================================================================

/// Posts each decoded code with the selected operation and swaps the page
/// for the response.
const SCANNER_SCRIPT: &str = r##"
function operacaoAtual() {
    return document.querySelector("input[name='operacao']:checked").value;
}

function enviarCodigo(codigo) {
    const body = new URLSearchParams();
    body.append("codigo", codigo);
    body.append("operacao", operacaoAtual());

    fetch("/scanner", {
        method: "POST",
        headers: { "Content-Type": "application/x-www-form-urlencoded" },
        body: body.toString()
    }).then(res => res.text()).then(html => {
        document.open();
        document.write(html);
        document.close();
    }).catch(err => {
        document.getElementById("camera").innerText = "Erro ao enviar o código: " + err;
    });
}

function iniciarScanner() {
    Quagga.init({
        inputStream: {
            name: "Live",
            type: "LiveStream",
            target: document.querySelector("#preview"),
            constraints: { facingMode: "environment" }
        },
        decoder: { readers: ["code_128_reader"] }
    }, function (err) {
        if (err) {
            document.getElementById("camera").innerText = "Erro ao acessar a câmera: " + err;
            return;
        }
        Quagga.start();
    });

    Quagga.onDetected(function (data) {
        const codigo = data.codeResult.code;
        Quagga.stop();
        enviarCodigo(codigo);
    });
}

iniciarScanner();
"##;

/// Camera page. `operation` is the radio button pre-selected.
pub fn scanner(operation: StockOperation, message: Option<&StatusMessage>) -> Markup {
    let saida = operation == StockOperation::Saida;

    layout(
        "Escaneamento com Câmera",
        true,
        Some(html! { script src=(QUAGGA_JS) {} }),
        html! {
            h2 { "📲 Escaneamento com Câmera" }
            form id="operacao-form" class="mb-3" {
                div.btn-group role="group" {
                    input type="radio" class="btn-check" name="operacao" id="entrada" value="entrada" autocomplete="off" checked[!saida];
                    label class="btn btn-outline-success" for="entrada" { "Entrada" }

                    input type="radio" class="btn-check" name="operacao" id="saida" value="saida" autocomplete="off" checked[saida];
                    label class="btn btn-outline-danger" for="saida" { "Saída" }
                }
            }
            video id="preview" class="border mb-3" style="width:100%; max-width:400px;" {}
            p id="camera" class="text-muted" {}
            (status_line("msg", message))
            script { (PreEscaped(SCANNER_SCRIPT)) }
            (back_links())
        },
    )
}

// =============================================================================
// Errors
// =============================================================================

pub fn erro(status: u16, reason: &str, detail: &str) -> Markup {
    layout(
        &format!("Erro {status}"),
        false,
        None,
        html! {
            h2 { "❌ " (status) " " (reason) }
            div.alert.alert-danger { (detail) }
            a href="/cadastro" class="btn btn-outline-primary" { "← Voltar ao Cadastro" }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relatorio_escapes_names_and_term() {
        let products = vec![Product::new("P00001", "<script>alert(1)</script>", 1)];
        let html = relatorio(&products, "\"><b>").into_string();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("\"><b>"));
    }

    #[test]
    fn test_scanner_preselects_operation() {
        let entrada = scanner(StockOperation::Entrada, None).into_string();
        assert!(entrada.contains(r#"id="entrada" value="entrada" autocomplete="off" checked>"#));
        assert!(entrada.contains(r#"id="saida" value="saida" autocomplete="off">"#));

        let saida = scanner(StockOperation::Saida, None).into_string();
        assert!(saida.contains(r#"id="saida" value="saida" autocomplete="off" checked>"#));
    }

    #[test]
    fn test_scanner_script_is_not_escaped() {
        let html = scanner(StockOperation::Entrada, None).into_string();
        assert!(html.contains("res => res.text()"));
        assert!(html.contains("code_128_reader"));
    }

    #[test]
    fn test_confirmacao_lists_fields() {
        let product = Product::new("P00007", "Widget", 10);
        let html = confirmacao(&product, "codigos/P00007.png", "/codigos/P00007.png").into_string();

        assert!(html.contains("P00007"));
        assert!(html.contains("Widget"));
        assert!(html.contains(r#"src="/codigos/P00007.png""#));
    }

    #[test]
    fn test_scanner_script_targets_preview() {
        let html = scanner(StockOperation::Saida, None).into_string();
        assert!(html.contains(r##"target: document.querySelector("#preview")"##));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_cadastro_has_no_name_length_limit() {
        let html = cadastro().into_string();
        assert!(!html.contains("maxlength"));
    }

    #[test]
    fn test_no_message_no_alert() {
        let html = baixa(None).into_string();
        assert!(!html.contains("alert-"));
    }
}
