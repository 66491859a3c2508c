//! Fixed HTML views for the gate. Handlers pick a view, they never build
//! markup inline.

const GATE_HEADING: &str = "ガントチャート アクセス認証";
const DENIED_HEADING: &str = "パスワードが違います。";

// Shared login form, rendered on the initial page and again after a mismatch.
const LOGIN_FORM: &str = r#"<form method="post">
    <label>このガントチャートツールにアクセスするにはパスワードが必要です</label><br><br>
    <input type="password" name="password" placeholder="パスワードを入力してください">
    <button type="submit">ログイン</button>
</form>
"#;

/// Initial page: gate heading plus the login form.
#[must_use]
pub fn login_page() -> String {
    format!("<h1>{GATE_HEADING}</h1>\n{LOGIN_FORM}")
}

/// Success view. Does not re-render the form; a fresh visit asks again.
#[must_use]
pub fn welcome_page() -> String {
    concat!(
        "<h1>ガントチャート</h1>\n",
        "<p>ようこそ！認証に成功しました。</p>\n",
        "<p><a href=\"/\">トップページに戻る（再度パスワードが必要です）</a></p>\n"
    )
    .to_string()
}

/// Mismatch view: error heading followed by the login form again.
#[must_use]
pub fn denied_page() -> String {
    format!("<h2>{DENIED_HEADING}</h2>\n{LOGIN_FORM}")
}
