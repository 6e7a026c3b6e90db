//! Fixed fanpage post templates. Deterministic: same input, same bytes.
//!
//! Iconography lives here and only here; the generation service is told to
//! return plain prose.

use crate::domain::entities::{MovementArticle, WeeklyAnalysis};

/// Constant closing line of every post.
pub const CLOSING_BANNER: &str =
    "❤️🌟✨ LIÊN ĐỘI TIỂU HỌC GIỒNG TRÔM – CÙNG RÈN LUYỆN, CÙNG TRƯỞNG THÀNH! ❤️✨🌟";

/// Title line of the weekly bulletin.
pub const WEEKLY_HEADLINE: &str = "✨ PHONG TRÀO: “Mỗi tuần một câu chuyện đẹp, một cuốn sách hay, một tấm gương sáng” 🌟🌟✨";

/// Format the weekly bulletin. Embeds all seven fields in fixed order:
/// week, date, topic, presenter, lesson, feedback, spread.
pub fn weekly_post(a: &WeeklyAnalysis) -> String {
    format!(
        "{WEEKLY_HEADLINE}\n\n\
         📅 Tuần {} ({}), Liên đội tiếp tục tổ chức buổi sinh hoạt đầu tuần với nội dung:\n\n\
         📘 Câu chuyện: “{}” 🧒 Người trình bày: Em {}\n\n\
         ⛰️ Bài học rút ra: {}\n\n\
         👏 {}\n\n\
         🌈 {}\n\n\
         {CLOSING_BANNER}",
        a.week, a.date, a.topic, a.presenter, a.lesson, a.feedback, a.spread
    )
}

/// Format the movement announcement. The headline carries the name exactly
/// as the user entered it.
pub fn movement_post(m: &MovementArticle) -> String {
    format!(
        "✨ PHONG TRÀO: “{}” 🌟🌟✨\n\n\
         📅 {}\n\n\
         📝 {}\n\n\
         💡 {}\n\n\
         {CLOSING_BANNER}",
        m.name,
        m.introduction,
        m.detailed_content,
        m.significance
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> WeeklyAnalysis {
        WeeklyAnalysis {
            week: "21".to_string(),
            date: "26/01/2026".to_string(),
            topic: "Dế Mèn phiêu lưu ký".to_string(),
            presenter: "Nguyễn Văn A - Lớp 5A".to_string(),
            lesson: "Lòng can đảm".to_string(),
            feedback: "Giọng kể truyền cảm".to_string(),
            spread: "Lan tỏa tinh thần đọc sách".to_string(),
        }
    }

    #[test]
    fn weekly_post_is_deterministic() {
        let a = sample_analysis();
        assert_eq!(weekly_post(&a), weekly_post(&a));
    }

    #[test]
    fn weekly_post_embeds_all_fields_in_order() {
        let a = sample_analysis();
        let text = weekly_post(&a);
        let fields = [
            &a.week, &a.date, &a.topic, &a.presenter, &a.lesson, &a.feedback, &a.spread,
        ];
        let mut cursor = 0;
        for field in fields {
            let at = text[cursor..]
                .find(field.as_str())
                .unwrap_or_else(|| panic!("field {field:?} missing or out of order"));
            cursor += at + field.len();
        }
        assert!(text.ends_with(CLOSING_BANNER));
    }

    #[test]
    fn movement_post_keeps_name_verbatim_and_closes_with_banner() {
        let m = MovementArticle {
            name: "Kế hoạch nhỏ".to_string(),
            introduction: "Ngày 10/03/2025 tại sân trường".to_string(),
            detailed_content: "Thu gom giấy vụn".to_string(),
            significance: "Rèn luyện ý thức tiết kiệm".to_string(),
        };
        let text = movement_post(&m);
        // The user's casing survives into the copied post.
        assert!(text.contains("“Kế hoạch nhỏ”"));
        assert!(!text.contains("KẾ HOẠCH NHỎ"));
        assert!(text.contains(&m.introduction));
        assert!(text.contains(&m.detailed_content));
        assert!(text.contains(&m.significance));
        assert!(text.ends_with(CLOSING_BANNER));
    }
}
