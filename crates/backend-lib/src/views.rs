// ============================
// crates/backend-lib/src/views.rs
// ============================
//! Minimal inline HTML templates for the portal pages.
//!
//! Three pages, no template engine: a static index, a static login form
//! whose page script drives the login entry point, and the symptoms page
//! rendered from the authenticated principal.

use phenotype_common::Principal;

/// HTML-escape helper (basic)
fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Phenotype Matcher</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         max-width: 480px; margin: 60px auto; padding: 0 20px; color: #1a1a1a; }
  h1 { font-size: 1.6rem; }
  p { color: #666; }
</style>
</head>
<body>
<h1>Welcome to Phenotype Matcher</h1>
<p>Start entering phenotype terms to find possible matches.</p>
<p><a href="/symptoms">Go to symptoms</a> (login required)</p>
</body>
</html>"#;

/// Login page. The script owns the client half of the flow: it disables
/// duplicate submits, bounds the request with a timeout, shows the failure
/// reason inline while keeping the entered values, and only navigates on
/// `ok: true`.
pub const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Login — Phenotype Matcher</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         display: flex; justify-content: center; align-items: center; min-height: 100vh;
         margin: 0; background: #fafafa; color: #1a1a1a; }
  form { background: #fff; padding: 32px; border: 1px solid #ccc; border-radius: 8px; width: 280px; }
  h2 { margin-top: 0; }
  input { display: block; margin-bottom: 10px; padding: 8px; width: 100%; box-sizing: border-box; }
  button { background: #0066cc; color: #fff; border: none; padding: 10px; width: 100%;
           border-radius: 4px; font-size: 1rem; cursor: pointer; }
  button:disabled { background: #99bbdd; cursor: wait; }
  #error { color: #b00020; margin: 0 0 10px; font-size: 0.9rem; }
</style>
</head>
<body>
<form id="login-form">
  <h2>Login</h2>
  <p id="error" hidden></p>
  <input type="email" id="email" placeholder="Email" required>
  <input type="password" id="password" placeholder="Password" required>
  <button type="submit" id="submit">Login</button>
</form>
<script>
const form = document.getElementById("login-form");
const button = document.getElementById("submit");
const error = document.getElementById("error");

form.addEventListener("submit", async (event) => {
  event.preventDefault();
  if (button.disabled) return; // ignore duplicate submits
  button.disabled = true;
  error.hidden = true;

  const controller = new AbortController();
  const timer = setTimeout(() => controller.abort(), 8000);
  try {
    const response = await fetch("/api/auth/login", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({
        email: document.getElementById("email").value,
        password: document.getElementById("password").value,
      }),
      signal: controller.signal,
    });
    const result = await response.json();
    if (result.ok) {
      window.location.assign("/symptoms");
      return;
    }
    error.textContent = result.error || "Unexpected error, please try again";
    error.hidden = false;
  } catch (_e) {
    error.textContent = "Unexpected error, please try again";
    error.hidden = false;
  } finally {
    clearTimeout(timer);
    button.disabled = false;
  }
});
</script>
</body>
</html>"#;

/// Render the symptoms page for an authenticated principal.
///
/// Pure rendering: access control happened at the route guard.
pub fn render_symptoms_page(principal: &Principal) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Symptoms — Phenotype Matcher</title>
<style>
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         max-width: 480px; margin: 60px auto; padding: 0 20px; color: #1a1a1a; }}
  input {{ padding: 8px; width: 70%; }}
  button {{ padding: 8px 16px; }}
</style>
</head>
<body>
<h1>Welcome, {name}!</h1>
<p>Enter your symptoms below:</p>
<input type="text" placeholder="Describe your symptoms...">
<button>Submit</button>
<form id="logout-form">
  <button type="submit">Log out</button>
</form>
<script>
document.getElementById("logout-form").addEventListener("submit", async (event) => {{
  event.preventDefault();
  try {{
    await fetch("/api/auth/logout", {{ method: "POST" }});
  }} catch (_e) {{
    // the cookie may outlive a failed request; the login page sorts it out
  }}
  window.location.assign("/login");
}});
</script>
</body>
</html>"#,
        name = esc(&principal.name),
    )
}
