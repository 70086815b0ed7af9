//! Task digest rendering
//!
//! One HTML mail per assignee listing their tasks with a priority badge,
//! the deadline, and accept/decline links carrying the task token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use meetline_domain::constants::TASK_TOKEN_BYTES;
use meetline_domain::{PendingTask, Priority};
use rand::RngCore;

const DEFAULT_GREETING_NAME: &str = "Team Member";

/// Random URL-safe token for accept/decline links.
pub fn generate_task_token() -> String {
    let mut bytes = [0u8; TASK_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Subject line for a digest with `count` tasks.
pub fn digest_subject(count: usize) -> String {
    format!("🎯 You have {count} new task(s) assigned")
}

pub const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#dc3545",
        Priority::Medium => "#ffc107",
        Priority::Low => "#28a745",
    }
}

/// Minimal escaping for model-provided text placed in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn task_card(task: &PendingTask, base_url: &str) -> String {
    let color = priority_color(task.priority);
    let base = base_url.trim_end_matches('/');
    format!(
        r#"
    <div style="background: white; padding: 15px; margin: 10px 0; border-left: 4px solid {color}; border-radius: 5px;">
      <p style="margin: 0 0 5px 0;"><span style="display: inline-block; padding: 3px 8px; border-radius: 3px; font-size: 12px; font-weight: bold; color: white; background: {color}">{priority}</span></p>
      <p style="margin: 5px 0; font-weight: bold;">{description}</p>
      <p style="margin: 5px 0; color: #666;">📅 Deadline: <strong>{deadline}</strong></p>
      <div style="margin-top: 15px;">
        <a href="{base}/tasks/accept/{token}" style="display: inline-block; padding: 10px 20px; background: #28a745; color: white; text-decoration: none; border-radius: 5px; margin-right: 10px;">✅ Accept &amp; Add to Calendar</a>
        <a href="{base}/tasks/decline/{token}" style="display: inline-block; padding: 10px 20px; background: #dc3545; color: white; text-decoration: none; border-radius: 5px;">❌ Decline</a>
      </div>
    </div>"#,
        priority = task.priority.to_string().to_uppercase(),
        description = escape_html(&task.description),
        deadline = escape_html(&task.deadline),
        token = task.token,
    )
}

/// Render the HTML body of a digest.
///
/// `assignee_name` is the display name of the first task's assignee, when
/// known.
pub fn render_digest(assignee_name: Option<&str>, tasks: &[PendingTask], base_url: &str) -> String {
    let name = assignee_name.filter(|n| !n.trim().is_empty()).unwrap_or(DEFAULT_GREETING_NAME);
    let high_priority = tasks.iter().filter(|task| task.priority == Priority::High).count();

    let warning = if high_priority > 0 {
        format!(
            r#"<p style="color: #dc3545;">⚠️ <strong>{high_priority}</strong> high priority task(s) require immediate attention!</p>"#
        )
    } else {
        String::new()
    };
    let cards: String = tasks.iter().map(|task| task_card(task, base_url)).collect();

    format!(
        r#"<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px 10px 0 0; }}
    .content {{ padding: 20px; background: #f9f9f9; }}
    .footer {{ padding: 20px; text-align: center; color: #666; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="header">
    <h2>📋 New Tasks Assigned</h2>
    <p>Hi {name},</p>
  </div>
  <div class="content">
    <p>You have been assigned <strong>{count}</strong> task(s) from a recent meeting:</p>
    {warning}
    {cards}
  </div>
  <div class="footer">
    <p>This is an automated notification from the meeting analysis service.</p>
    <p>Click "Accept" to add the task to your calendar, or "Decline" to reject it.</p>
  </div>
</body>
</html>
"#,
        name = escape_html(name),
        count = tasks.len(),
    )
}
