//! Rule-based assistant responder.
//!
//! Despite the "assistant" name this is not a language model: the reply is
//! a fully deterministic, stateless function of the utterance and the
//! document context. The utterance is normalized (trim, lowercase) and
//! tested against an ordered rule list; the first matching rule wins.
//! When nothing matches, the default reply echoes a truncated copy of the
//! original utterance.

use once_cell::sync::Lazy;
use regex::Regex;
use tramita_core::document::Document;

/// Context listings show at most this many documents, followed by an
/// overflow counter for the remainder.
const MAX_CONTEXT_ITEMS: usize = 5;

/// The unmatched utterance is echoed truncated to this many characters.
const ECHO_LIMIT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Greeting,
    Gratitude,
    Help,
    Documents,
    Processes,
    Reports,
    Summary,
    Settings,
    Search,
}

/// Ordered rule list; earlier rules shadow later ones.
static RULES: Lazy<Vec<(Regex, Intent)>> = Lazy::new(|| {
    let rule = |pattern: &str, intent: Intent| (Regex::new(pattern).unwrap(), intent);
    vec![
        rule(r"\b(oi|olá|ola|bom dia|boa tarde|boa noite)\b", Intent::Greeting),
        rule(r"\b(obrigado|obrigada|valeu|agradecido|agradecida)\b", Intent::Gratitude),
        rule(r"\b(ajuda|ajudar|socorro|como funciona)\b", Intent::Help),
        rule(r"\b(documentos?|arquivos?|pdf|edital|editais|ata|atas)\b", Intent::Documents),
        rule(r"\b(processos?|tramitação|tramitacao|protocolo)\b", Intent::Processes),
        rule(r"\b(relatórios?|relatorios?|indicadores?)\b", Intent::Reports),
        rule(r"\b(resumo|resumir|status|situação|situacao|andamento)\b", Intent::Summary),
        rule(
            r"\b(configurações?|configuracoes|configuracao|ajustes|perfil)\b",
            Intent::Settings,
        ),
        rule(r"\b(buscar|busca|procurar|pesquisar|encontrar|localizar)\b", Intent::Search),
    ]
});

/// Produces the canned reply for a user utterance.
///
/// `context` is the short list of documents currently visible to the
/// conversation; rules that list documents truncate it at
/// [`MAX_CONTEXT_ITEMS`] entries.
pub fn respond(utterance: &str, context: &[Document]) -> String {
    let normalized = utterance.trim().to_lowercase();

    for (pattern, intent) in RULES.iter() {
        if pattern.is_match(&normalized) {
            return render(*intent, context);
        }
    }

    fallback(utterance)
}

fn render(intent: Intent, context: &[Document]) -> String {
    match intent {
        Intent::Greeting => "Olá! Sou o assistente do sistema de tramitação. Posso ajudar \
             com documentos, processos e relatórios. O que você precisa?"
            .to_string(),
        Intent::Gratitude => {
            "De nada! Se precisar de mais alguma coisa, é só perguntar.".to_string()
        }
        Intent::Help => "Posso ajudar você a:\n\
             • consultar documentos e seus setores\n\
             • acompanhar processos em tramitação\n\
             • resumir a situação do acervo\n\
             Pergunte, por exemplo, \"quais documentos temos?\""
            .to_string(),
        Intent::Documents => {
            if context.is_empty() {
                "Não encontrei documentos disponíveis no momento.".to_string()
            } else {
                format!(
                    "Encontrei {} documento(s):\n{}",
                    context.len(),
                    list_documents(context)
                )
            }
        }
        Intent::Processes => "Os processos em tramitação aparecem na aba Processos, com a \
             etapa atual, o setor responsável e a prioridade. Peça um resumo \
             se quiser a situação geral."
            .to_string(),
        Intent::Reports => "Os relatórios reúnem a contagem de processos por situação e os \
             documentos publicados por setor. Acesse a aba Relatórios para \
             visualizar ou exportar."
            .to_string(),
        Intent::Summary => {
            if context.is_empty() {
                "Não há documentos no contexto para resumir.".to_string()
            } else {
                format!(
                    "Resumo do acervo atual ({} documento(s)):\n{}",
                    context.len(),
                    list_documents(context)
                )
            }
        }
        Intent::Settings => "Nas configurações você ajusta seu perfil, as notificações e o \
             setor padrão de trabalho."
            .to_string(),
        Intent::Search => {
            if context.is_empty() {
                "Diga o termo que você procura e eu verifico nos documentos.".to_string()
            } else {
                format!(
                    "Posso buscar entre estes documentos:\n{}",
                    list_documents(context)
                )
            }
        }
    }
}

/// Lists up to [`MAX_CONTEXT_ITEMS`] documents with their sectors,
/// appending the exact overflow count when the context is longer.
fn list_documents(context: &[Document]) -> String {
    let mut lines: Vec<String> = context
        .iter()
        .take(MAX_CONTEXT_ITEMS)
        .map(|document| format!("• {} ({})", document.title, document.sector.label()))
        .collect();

    if context.len() > MAX_CONTEXT_ITEMS {
        lines.push(format!(
            "… e mais {} documento(s).",
            context.len() - MAX_CONTEXT_ITEMS
        ));
    }

    lines.join("\n")
}

fn fallback(utterance: &str) -> String {
    let echo: String = utterance.trim().chars().take(ECHO_LIMIT).collect();
    format!(
        "Desculpe, não entendi \"{}\". Tente perguntar sobre documentos, \
         processos ou relatórios.",
        echo
    )
}
