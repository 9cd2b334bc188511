//! HTML rendering of result cards and chat messages.
//!
//! Pure functions from view models to markup; nothing here touches a page.

use crate::domain::{ChatMessage, ResultView, format_chat_message};

/// Result card body plus the card class the container must carry.
pub fn render_result(view: &ResultView) -> String {
    let details: String = view
        .details
        .iter()
        .map(|row| {
            format!(
                r#"
        <div class="detail-row">
            <span class="detail-label">{}</span>
            <span class="detail-value">{}</span>
        </div>"#,
                row.label, row.value
            )
        })
        .collect();

    format!(
        r#"<div class="result-card {class}">
    <div class="result-header">
        <div class="result-icon">{icon}</div>
        <h2 class="result-title">{title}</h2>
        <p class="result-probability">{probability}</p>
        <p class="result-confidence">{confidence}</p>
    </div>
    <div class="result-details">{details}
    </div>
    {risks}
</div>"#,
        class = view.card_class,
        icon = view.icon,
        title = view.title,
        probability = view.probability_text,
        confidence = view.band.message(),
        details = details,
        risks = render_risk_factors(&view.risk_factors),
    )
}

fn render_risk_factors(risks: &[String]) -> String {
    if risks.is_empty() {
        return r#"<div class="risk-factors risk-factors-clear">
        <h4>✓ No Major Risk Factors Identified</h4>
    </div>"#
            .to_string();
    }
    let items: String = risks.iter().map(|r| format!("<li>{}</li>", r)).collect();
    format!(
        r#"<div class="risk-factors">
        <h4>Risk Factors</h4>
        <ul>{}</ul>
    </div>"#,
        items
    )
}

/// One chat bubble. Both sides go through the reply formatter.
pub fn render_chat_message(message: &ChatMessage) -> String {
    format!(
        r#"<div class="chat-message {}-message"><div class="message-content">{}</div></div>"#,
        message.sender.as_str(),
        format_chat_message(&message.text)
    )
}

pub fn render_typing_indicator() -> &'static str {
    r#"<div class="chat-message bot-message" id="typingIndicator"><div class="message-content"><span style="opacity: 0.6;">Typing...</span></div></div>"#
}

/// Standalone page around a result card, for saving next to the report.
pub fn render_result_page(view: &ResultView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>LoanVista - {title}</title>
    <style>{css}</style>
</head>
<body>
{card}
</body>
</html>"#,
        title = view.title,
        css = inline_css(),
        card = render_result(view),
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: system-ui, sans-serif; background: #0a1628; padding: 2rem; }
.result-card { max-width: 36rem; margin: 0 auto; background: #fff; border-radius: 12px; padding: 2rem; }
.result-approved { border-top: 6px solid #d4af37; }
.result-rejected { border-top: 6px solid #c0392b; }
.result-header { text-align: center; }
.result-icon { font-size: 3rem; }
.result-confidence { color: #4a5568; margin-top: 0.5rem; }
.detail-row { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #edf2f7; }
.detail-label { color: #718096; }
.risk-factors { margin-top: 1.5rem; padding: 1rem; border-radius: 8px; background: #fff5f5; color: #742a2a; }
.risk-factors-clear { background: #d4edda; color: #155724; }
"#
}
