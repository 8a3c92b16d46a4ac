//! Category display formatting
//!
//! Formats categories for terminal output as a table with expense counts.

use crate::models::Category;

/// Format categories as a table, each with its attached expense count
pub fn format_category_list(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'gastos category add <name>' to create one.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|(c, _)| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:8}  {:<width$}  {:>8}\n",
        "ID",
        "Category",
        "Expenses",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<width$}  {:->8}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for (category, expense_count) in categories {
        output.push_str(&format!(
            "{:8}  {:<width$}  {:>8}\n",
            category.id.short(),
            category.name,
            expense_count,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        let output = format_category_list(&[]);
        assert!(output.contains("No categories found"));
        assert!(output.contains("gastos category add"));
    }

    #[test]
    fn test_format_category_list() {
        let rows: Vec<(Category, usize)> = Category::seed_set()
            .into_iter()
            .zip([3, 0, 1, 0, 0, 2])
            .collect();

        let output = format_category_list(&rows);
        assert!(output.contains("Comida"));
        assert!(output.contains("Educación"));
        assert!(output.contains("Expenses"));
    }

    #[test]
    fn test_counts_appear_in_rows() {
        let category = Category::new("Mascotas");
        let output = format_category_list(&[(category, 7)]);

        let row = output
            .lines()
            .find(|l| l.contains("Mascotas"))
            .unwrap();
        assert!(row.contains('7'));
    }
}
