//! Language-specific instructions wrapped around the incoming message.

use chatterbox_core::Language;

/// Wrap `message` in an instruction asking for a one-sentence,
/// conversational reply in `language`.
///
/// ```
/// use chatterbox_core::Language;
/// use chatterbox_models::build_instruction;
///
/// let text = build_instruction("gm", Language::English);
/// assert!(text.starts_with("Reply to the following message in English: gm"));
/// ```
pub fn build_instruction(message: &str, language: Language) -> String {
    match language {
        Language::English => format!(
            "Reply to the following message in English: {message}\n\n\
             Make it 1 sentence using natural everyday English."
        ),
        Language::Indonesian => format!(
            "Balas pesan berikut dalam bahasa Indonesia: {message}\n\n\
             Buatlah menjadi 1 kalimat menggunakan bahasa sehari-hari Indonesia yang natural."
        ),
    }
}
