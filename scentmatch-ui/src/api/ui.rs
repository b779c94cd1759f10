//! Form and results pages
//!
//! Server-rendered HTML, assembled with format! the way the rest of the
//! application builds its pages. The form is populated from the static
//! taxonomy and personality tables; the results page lists up to five
//! recommendation cards with a server-generated timestamp.

use axum::extract::{Form, State};
use axum::response::Html;
use chrono::Local;

use scentmatch_common::taxonomy::{PERSONALITY_PROFILES, SCENT_CATEGORIES};

use crate::recommend::{recommend, Recommendation, RecommendError};
use crate::AppState;

/// Validation message shown when a submission lacks required selections
const VALIDATION_MESSAGE: &str = "请至少选择一种香味和一种性格特征";

/// GET /
///
/// Serves the preference form
pub async fn form_page() -> Html<String> {
    Html(render_form(None))
}

/// POST /
///
/// Form fields: repeated `scent_prefs` selections, single `personality`
/// selection, optional `gender` selection (empty value = no filter).
/// A submission without at least one scent preference and a personality
/// redisplays the form with a validation message and never touches the
/// catalog.
pub async fn submit_preferences(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, RecommendError> {
    let mut scent_prefs = Vec::new();
    let mut personality = None;
    let mut gender = None;

    for (key, value) in fields {
        match key.as_str() {
            "scent_prefs" => scent_prefs.push(value),
            "personality" if !value.is_empty() => personality = Some(value),
            "gender" if !value.is_empty() => gender = Some(value),
            _ => {}
        }
    }

    let personality = match personality {
        Some(personality) if !scent_prefs.is_empty() => personality,
        _ => return Ok(Html(render_form(Some(VALIDATION_MESSAGE)))),
    };

    let recommendations = recommend(&state, &scent_prefs, &personality, gender.as_deref()).await?;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    Ok(Html(render_results(&recommendations, &timestamp)))
}

/// Shared page skeleton: dark theme header plus the given body
fn render_page(body: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = env!("GIT_HASH");
    let build_timestamp = env!("BUILD_TIMESTAMP");

    format!(
        r#"<!DOCTYPE html>
<html lang="zh">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ScentMatch 香水推荐</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 20px;
            margin-bottom: 30px;
        }}
        .header-content {{
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}
        .header-right {{
            text-align: right;
            font-size: 14px;
            color: #888;
            font-family: 'Courier New', monospace;
            line-height: 1.2;
        }}
        h1 {{
            font-size: 26px;
            margin-bottom: 5px;
            color: #4a9eff;
        }}
        .subtitle {{
            color: #888;
            font-size: 16px;
        }}
        .content {{
            padding: 0 20px 40px 20px;
            max-width: 860px;
        }}
        h2 {{
            color: #4a9eff;
            margin-top: 20px;
            margin-bottom: 10px;
        }}
        fieldset {{
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 12px 16px;
            margin-bottom: 20px;
        }}
        legend {{
            color: #4a9eff;
            padding: 0 6px;
        }}
        label {{
            display: inline-block;
            margin: 4px 16px 4px 0;
        }}
        select {{
            background: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 6px 10px;
        }}
        .button {{
            display: inline-block;
            padding: 10px 20px;
            background: #4a9eff;
            color: white;
            border: none;
            border-radius: 4px;
            margin: 10px 5px 10px 0;
            font-weight: 600;
            cursor: pointer;
        }}
        .button:hover {{
            background: #3a8eef;
        }}
        .error {{
            background: #3a1a1a;
            border: 1px solid #ef4444;
            color: #ef4444;
            border-radius: 4px;
            padding: 10px 16px;
            margin-bottom: 20px;
        }}
        .timestamp {{
            color: #888;
            font-size: 14px;
            margin-bottom: 20px;
        }}
        .card {{
            background: #2a2a2a;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 16px;
            margin-bottom: 16px;
        }}
        .card h3 {{
            color: #e0e0e0;
            margin-bottom: 6px;
        }}
        .card .meta {{
            color: #888;
            margin-bottom: 8px;
        }}
        .card .score {{
            color: #10b981;
            font-weight: 600;
        }}
        .card img {{
            max-width: 180px;
            border-radius: 4px;
            margin-bottom: 10px;
        }}
        .notice {{
            color: #888;
            padding: 20px 0;
        }}
        a {{
            color: #4a9eff;
        }}
    </style>
</head>
<body>
    <header>
        <div class="header-content">
            <div>
                <h1>ScentMatch 香水推荐</h1>
                <p class="subtitle">按香味偏好与性格匹配香水</p>
            </div>
            <div class="header-right">
                <div>scentmatch-ui v{version}</div>
                <div>{git_hash} {build_timestamp}</div>
            </div>
        </div>
    </header>
    <div class="content">
{body}
    </div>
</body>
</html>
"#
    )
}

/// Render the preference form, optionally with a validation message
fn render_form(error: Option<&str>) -> String {
    let error_block = match error {
        Some(message) => format!(r#"        <div class="error">{}</div>"#, message),
        None => String::new(),
    };

    let scent_inputs: String = SCENT_CATEGORIES
        .iter()
        .map(|category| {
            format!(
                r#"            <label><input type="checkbox" name="scent_prefs" value="{label}"> {label}</label>
"#,
                label = category.label
            )
        })
        .collect();

    let personality_inputs: String = PERSONALITY_PROFILES
        .iter()
        .map(|profile| {
            format!(
                r#"            <label><input type="radio" name="personality" value="{label}"> {label}</label>
"#,
                label = profile.label
            )
        })
        .collect();

    let body = format!(
        r#"{error_block}
        <form method="post" action="/">
        <fieldset>
            <legend>香味偏好（可多选）</legend>
{scent_inputs}        </fieldset>
        <fieldset>
            <legend>性格特征</legend>
{personality_inputs}        </fieldset>
        <fieldset>
            <legend>性别偏好（可选）</legend>
            <select name="gender">
                <option value="">不限</option>
                <option value="男香">男香</option>
                <option value="女香">女香</option>
            </select>
        </fieldset>
        <button class="button" type="submit">推荐香水</button>
        </form>"#
    );

    render_page(&body)
}

/// Render the results page with up to five recommendation cards
fn render_results(recommendations: &[Recommendation], timestamp: &str) -> String {
    let cards: String = if recommendations.is_empty() {
        r#"        <p class="notice">没有找到匹配的香水，换一组偏好再试试。</p>
"#
        .to_string()
    } else {
        recommendations.iter().map(render_card).collect()
    };

    let body = format!(
        r#"        <h2>推荐结果</h2>
        <p class="timestamp">生成时间: {timestamp}</p>
{cards}        <p><a href="/">返回重新选择</a></p>"#
    );

    render_page(&body)
}

/// Render one recommendation card
fn render_card(recommendation: &Recommendation) -> String {
    let image_block = match &recommendation.image_path {
        Some(file_name) => format!(
            r#"            <img src="/images/{file}" alt="{name}">
"#,
            file = file_name,
            name = recommendation.name
        ),
        None => String::new(),
    };

    format!(
        r#"        <div class="card">
{image_block}            <h3>{brand} {name}</h3>
            <p class="meta">{frag_type} / {attribute}</p>
            <p>签名香调: {sig_note}</p>
            <p>匹配香调: {matched_notes}</p>
            <p class="score">匹配度: {score}</p>
            <p>{comment}</p>
        </div>
"#,
        brand = recommendation.brand,
        name = recommendation.name,
        frag_type = recommendation.frag_type,
        attribute = recommendation.attribute,
        sig_note = recommendation.sig_note,
        matched_notes = recommendation.matched_notes.join(", "),
        score = recommendation.score,
        comment = recommendation.comment,
    )
}
