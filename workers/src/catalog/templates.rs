//! オプトアウト申請テンプレート
//!
//! プレースホルダ（`[Full Name]` 等）入りのテキストのみ。個人情報は含まない。

/// テンプレートID一覧
pub const TEMPLATE_IDS: [&str; 6] = [
    "default-gdpr",
    "default-ccpa",
    "truthfinder-optout",
    "email-generic",
    "phone-script",
    "mail-letter",
];

/// IDでテンプレート本文を取得
pub fn get(template_id: &str) -> Option<&'static str> {
    let text = match template_id {
        "default-gdpr" => include_str!("../../data/templates/default-gdpr.txt"),
        "default-ccpa" => include_str!("../../data/templates/default-ccpa.txt"),
        "truthfinder-optout" => include_str!("../../data/templates/truthfinder-optout.txt"),
        "email-generic" => include_str!("../../data/templates/email-generic.txt"),
        "phone-script" => include_str!("../../data/templates/phone-script.txt"),
        "mail-letter" => include_str!("../../data/templates/mail-letter.txt"),
        _ => return None,
    };
    Some(text)
}
