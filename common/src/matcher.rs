//! キーワード照合
//!
//! 単純な部分一致（大文字小文字無視）で判定する。単語境界は見ないため
//! "uti" は "utility" にも一致する。

use crate::types::{KeywordGroup, KeywordPresence};

/// テキスト中の各グループの有無を判定
///
/// いずれかの表記がテキストに部分一致すれば true。空テキストは全て false。
pub fn match_keywords(text: &str, groups: &[KeywordGroup]) -> KeywordPresence {
    let haystack = text.to_lowercase();
    let mut presence = KeywordPresence::default();

    for group in groups {
        let found = group
            .synonyms
            .iter()
            .filter(|s| !s.is_empty())
            .any(|s| haystack.contains(&s.to_lowercase()));
        presence.push(group.name.clone(), found);
    }

    presence
}
