/// Document source
/// Lists `(id, text)` pairs for the corpus. The id is the logical file name
/// and must be unique within one corpus.
///
/// Reading files or walking directories is up to the implementor.
pub trait DocumentSource {
    fn list_documents(&self) -> Vec<(String, String)>;
}

impl<I, T> DocumentSource for [(I, T)]
where
    I: AsRef<str>,
    T: AsRef<str>,
{
    fn list_documents(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(id, text)| (id.as_ref().to_owned(), text.as_ref().to_owned()))
            .collect()
    }
}

impl<I, T> DocumentSource for Vec<(I, T)>
where
    I: AsRef<str>,
    T: AsRef<str>,
{
    fn list_documents(&self) -> Vec<(String, String)> {
        self.as_slice().list_documents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_vecs_list_in_order() {
        let pairs = [("a.java", "class A {}"), ("b.java", "class B {}")];
        let listed = pairs.as_slice().list_documents();
        assert_eq!(listed[0], ("a.java".to_string(), "class A {}".to_string()));
        assert_eq!(listed[1].0, "b.java");

        let owned = vec![("c.java".to_string(), String::new())];
        assert_eq!(owned.list_documents(), vec![("c.java".to_string(), String::new())]);
    }
}
