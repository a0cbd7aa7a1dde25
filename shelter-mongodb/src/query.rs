//! Query translation from filter expressions to MongoDB query syntax.

use bson::{Document, Bson, doc};

use shelter_core::{
    query::{QueryVisitor, Expr, FieldOp},
    error::DocumentStoreError,
};


/// Translates filter expressions into MongoDB query documents.
pub(crate) struct MongoQueryTranslator;

impl QueryVisitor for MongoQueryTranslator {
    type Output = Document;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        Ok(doc! {
            "$and": exprs
                .iter()
                .map(|expr| self.visit_expr(expr))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        Ok(doc! {
            "$or": exprs
                .iter()
                .map(|expr| self.visit_expr(expr))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn visit_field(&mut self, field: &str, op: &FieldOp, value: &Bson) -> Result<Self::Output, Self::Error> {
        Ok(doc! {
            field: match op {
                FieldOp::Eq => doc! { "$eq": value.clone() },
                FieldOp::Contains => match value {
                    Bson::String(s) => doc! { "$regex": regex::escape(s), "$options": "i" },
                    _ => return Err(DocumentStoreError::Backend("Contains operator requires a string value".to_string())),
                },
            }
        })
    }

    fn visit_range(&mut self, field: &str, gte: Option<&Bson>, lte: Option<&Bson>) -> Result<Self::Output, Self::Error> {
        let mut bounds = Document::new();

        if let Some(min) = gte {
            bounds.insert("$gte", min.clone());
        }
        if let Some(max) = lte {
            bounds.insert("$lte", max.clone());
        }

        Ok(doc! { field: bounds })
    }
}

#[cfg(test)]
mod tests {
    use shelter_core::query::Filter;

    use super::*;

    fn translate(expr: &Expr) -> Document {
        MongoQueryTranslator.visit_expr(expr).unwrap()
    }

    #[test]
    fn equality_uses_eq_operator() {
        assert_eq!(
            translate(&Filter::eq("featured", false)),
            doc! { "featured": { "$eq": false } }
        );
    }

    #[test]
    fn contains_escapes_pattern_and_ignores_case() {
        assert_eq!(
            translate(&Filter::contains("name", "mr. (fluffy)")),
            doc! { "name": { "$regex": r"mr\. \(fluffy\)", "$options": "i" } }
        );
    }

    #[test]
    fn range_becomes_single_constraint() {
        assert_eq!(
            translate(&Filter::range("age", Some(2), Some(5)).unwrap()),
            doc! { "age": { "$gte": 2, "$lte": 5 } }
        );
        assert_eq!(
            translate(&Filter::range("age", None, Some(5)).unwrap()),
            doc! { "age": { "$lte": 5 } }
        );
    }

    #[test]
    fn search_conjunction_nests_disjunction() {
        let expr = Filter::and([
            Filter::or([Filter::contains("name", "lu"), Filter::contains("breed", "lu")]),
            Filter::eq("species", "dog"),
        ]);

        assert_eq!(
            translate(&expr),
            doc! {
                "$and": [
                    { "$or": [
                        { "name": { "$regex": "lu", "$options": "i" } },
                        { "breed": { "$regex": "lu", "$options": "i" } },
                    ] },
                    { "species": { "$eq": "dog" } },
                ]
            }
        );
    }
}
