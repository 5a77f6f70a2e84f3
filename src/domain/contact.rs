//! 세션 단위 연락처 저장소.

use indexmap::IndexMap;

use crate::domain::command::CommandError;

/// 이름 -> 전화번호 매핑. 목록 출력 시 삽입 순서를 유지한다.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    entries: IndexMap<String, String>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 같은 이름이 있으면 덮어쓴다(last write wins).
    pub fn add(&mut self, name: &str, phone: &str) {
        self.entries.insert(name.to_string(), phone.to_string());
    }

    /// 기존 연락처의 번호만 바꾼다. 덮어써도 원래 위치는 유지된다.
    pub fn change(&mut self, name: &str, phone: &str) -> Result<(), CommandError> {
        let slot = self
            .entries
            .get_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        *slot = phone.to_string();
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&str, CommandError> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    pub fn list_all(&self) -> String {
        if self.entries.is_empty() {
            return "No contacts.".to_string();
        }

        self.entries
            .iter()
            .map(|(name, phone)| format!("{name}: {phone}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_keeps_insertion_order() {
        let mut store = ContactStore::new();
        assert_eq!(store.list_all(), "No contacts.");

        store.add("b", "2");
        store.add("a", "1");
        store.change("b", "3").unwrap();
        assert_eq!(store.list_all(), "b: 3\na: 1");
    }

    #[test]
    fn add_overwrites_and_change_requires_existing() {
        let mut store = ContactStore::new();
        store.add("a", "1");
        store.add("a", "2");
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("a"), Ok("2"));

        assert_eq!(
            store.change("ghost", "9"),
            Err(CommandError::ContactNotFound("ghost".into()))
        );
        assert_eq!(
            store.lookup("ghost"),
            Err(CommandError::ContactNotFound("ghost".into()))
        );
    }
}
