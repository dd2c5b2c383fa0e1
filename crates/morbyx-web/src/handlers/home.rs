//! Query page — symptom form and server-rendered prediction table.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use morbyx_ranker::{rank, Prediction, RankOptions};

use crate::state::SharedState;

#[derive(Deserialize)]
pub struct QueryForm {
    pub symptoms: String,
}

pub async fn home_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render_query_page(None))
}

pub async fn query_submit(
    State(state): State<SharedState>,
    Form(form): Form<QueryForm>,
) -> Html<String> {
    let opts = RankOptions {
        limit: state.ranker.limit,
        min_score: state.ranker.min_score,
        include_matched: true,
    };
    let predictions = rank(&state.index, &form.symptoms, &opts);
    Html(render_query_page(Some((&form.symptoms, predictions))))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_query_page(results: Option<(&str, Vec<Prediction>)>) -> String {
    let results_html = match results {
        None => String::new(),
        Some((query, ref predictions)) if predictions.is_empty() => format!(
            r#"<div class="alert">No match for: <em>{}</em>. Check spelling, or separate symptoms with commas.</div>"#,
            escape(query)
        ),
        Some((query, predictions)) => {
            let rows: String = predictions
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let pct = (p.score * 100.0).round() as u32;
                    let matched = p
                        .matched_symptoms
                        .as_deref()
                        .unwrap_or_default()
                        .join(", ");
                    format!(
                        r#"
                <tr>
                    <td><span class="rank-badge">#{}</span></td>
                    <td class="disease">{}</td>
                    <td>
                        <div class="score-cell">
                            <div class="bar-track"><div class="bar" style="width:{}%"></div></div>
                            <code>{:.2}</code>
                        </div>
                    </td>
                    <td class="muted">{}</td>
                </tr>"#,
                        i + 1,
                        escape(&p.disease),
                        pct,
                        p.score,
                        escape(&matched)
                    )
                })
                .collect();
            format!(
                r#"
        <h2>Candidates for: <em>{}</em></h2>
        <table>
            <thead><tr><th>Rank</th><th>Disease</th><th>Score</th><th>Matched symptoms</th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
                escape(query),
                rows
            )
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Morbyx — Symptom Checker</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 820px; margin: 2rem auto; padding: 0 1rem; color: #1f2430; }}
        h1 {{ font-size: 1.6rem; }}
        form {{ display: flex; gap: 0.5rem; margin: 1.5rem 0; }}
        input[type=text] {{ flex: 1; padding: 0.6rem; border: 1px solid #c6ccd8; border-radius: 6px; }}
        button {{ padding: 0.6rem 1.2rem; border: 0; border-radius: 6px; background: #2b5fd9; color: #fff; cursor: pointer; }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 1rem; }}
        th, td {{ text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #e4e7ee; }}
        .rank-badge {{ font-weight: 700; color: #2b5fd9; }}
        .disease {{ font-weight: 600; }}
        .score-cell {{ display: flex; align-items: center; gap: 0.5rem; }}
        .bar-track {{ width: 120px; height: 6px; background: #e4e7ee; border-radius: 3px; }}
        .bar {{ height: 6px; background: #2b5fd9; border-radius: 3px; }}
        .muted {{ color: #6b7280; }}
        .alert {{ padding: 0.75rem 1rem; background: #fff6e6; border: 1px solid #f0d9a8; border-radius: 6px; }}
        .hint {{ color: #6b7280; font-size: 0.9rem; }}
    </style>
</head>
<body>
    <h1>Morbyx symptom checker</h1>
    <p class="hint">Enter symptoms separated by commas, e.g. <code>fever, cough, sore throat</code>.</p>
    <form method="post" action="/query">
        <input type="text" name="symptoms" placeholder="fever, cough" required>
        <button type="submit">Check</button>
    </form>
    {}
</body>
</html>"#,
        results_html
    )
}
