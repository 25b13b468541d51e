//! HTML views.
//!
//! Pages are assembled from small builder functions writing into a
//! `String`; every user-supplied value passes through [`escape`] on the
//! way out. Display ordering comes from the domain sort helpers, so the
//! action links inside each entry always carry the original storage
//! index.

use std::fmt::Write;

use crate::domain::session::Flash;
use crate::domain::todos::{sort_lists, sort_todos, TodoList};

/// Escape text for embedding in HTML element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, flash: &Flash, body: &str) -> String {
    let mut page = String::with_capacity(body.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{} - Listkeeper</title>", escape(title));
    page.push_str("</head>\n<body>\n");
    if let Some(error) = &flash.error {
        let _ = writeln!(page, "<div class=\"flash error\">{}</div>", escape(error));
    }
    if let Some(success) = &flash.success {
        let _ = writeln!(
            page,
            "<div class=\"flash success\">{}</div>",
            escape(success)
        );
    }
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}

/// The all-lists page: incomplete lists first, each linking to its detail
/// view with a remaining/total count.
pub fn lists_page(lists: &[TodoList], flash: &Flash) -> String {
    let mut body = String::new();
    body.push_str("<h1>Todo Lists</h1>\n<ul class=\"lists\">\n");
    for (index, list) in sort_lists(lists) {
        let class = if list.is_complete() { " class=\"complete\"" } else { "" };
        let _ = writeln!(
            body,
            "<li{class}><a href=\"/lists/{index}\">{}</a> \
             <span class=\"count\">{} / {}</span>\
             <form action=\"/lists/{index}/delete\" method=\"post\">\
             <button type=\"submit\">Delete</button></form></li>",
            escape(&list.name),
            list.remaining_count(),
            list.todos_count(),
        );
    }
    body.push_str("</ul>\n<a href=\"/lists/new\">New List</a>\n");
    layout("All Lists", flash, &body)
}

/// The list-creation form. `attempted` refills the input after a
/// validation failure.
pub fn new_list_page(flash: &Flash, attempted: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1>New Todo List</h1>\n");
    let _ = writeln!(
        body,
        "<form action=\"/lists\" method=\"post\">\
         <label for=\"list_name\">List name</label>\
         <input type=\"text\" id=\"list_name\" name=\"list_name\" value=\"{}\">\
         <button type=\"submit\">Create</button></form>",
        escape(attempted)
    );
    body.push_str("<a href=\"/lists\">All Lists</a>\n");
    layout("New List", flash, &body)
}

/// The rename form for one list. `attempted` refills the input after a
/// validation failure.
pub fn edit_list_page(index: usize, list: &TodoList, flash: &Flash, attempted: &str) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Editing \"{}\"</h1>", escape(&list.name));
    let _ = writeln!(
        body,
        "<form action=\"/lists/{index}\" method=\"post\">\
         <label for=\"new_list_name\">New list name</label>\
         <input type=\"text\" id=\"new_list_name\" name=\"new_list_name\" value=\"{}\">\
         <button type=\"submit\">Save</button></form>",
        escape(attempted)
    );
    let _ = writeln!(body, "<a href=\"/lists/{index}\">Back</a>");
    layout("Edit List", flash, &body)
}

/// The detail page for one list: todos partitioned incomplete-first, a
/// toggle and delete control per todo, the add form, and complete-all.
pub fn list_page(index: usize, list: &TodoList, flash: &Flash) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(&list.name));
    let _ = writeln!(
        body,
        "<p><a href=\"/lists\">All Lists</a> \
         <a href=\"/lists/{index}/edit\">Edit</a></p>"
    );

    body.push_str("<ul class=\"todos\">\n");
    for (todo_index, todo) in sort_todos(&list.todos) {
        let class = if todo.completed { " class=\"complete\"" } else { "" };
        // The toggle form submits the inverse of the current state
        let next_state = if todo.completed { "false" } else { "true" };
        let toggle_label = if todo.completed { "Undo" } else { "Complete" };
        let _ = writeln!(
            body,
            "<li{class}>\
             <form action=\"/lists/{index}/todos/{todo_index}\" method=\"post\">\
             <input type=\"hidden\" name=\"completed\" value=\"{next_state}\">\
             <button type=\"submit\">{toggle_label}</button></form>\
             <span class=\"name\">{}</span>\
             <form action=\"/lists/{index}/todos/{todo_index}/delete\" method=\"post\">\
             <button type=\"submit\">Delete</button></form></li>",
            escape(&todo.name),
        );
    }
    body.push_str("</ul>\n");

    let _ = writeln!(
        body,
        "<form action=\"/lists/{index}/todos\" method=\"post\">\
         <label for=\"todo\">Add a todo</label>\
         <input type=\"text\" id=\"todo\" name=\"todo\">\
         <button type=\"submit\">Add</button></form>"
    );
    if !list.todos.is_empty() {
        let _ = writeln!(
            body,
            "<form action=\"/lists/{index}/todo_all\" method=\"post\">\
             <button type=\"submit\">Complete All</button></form>"
        );
    }
    layout(&list.name, flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todos::Todo;

    fn list(name: &str, todos: Vec<(&str, bool)>) -> TodoList {
        TodoList {
            name: name.to_string(),
            todos: todos
                .into_iter()
                .map(|(name, completed)| Todo {
                    name: name.to_string(),
                    completed,
                })
                .collect(),
        }
    }

    #[test]
    fn test_escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_lists_page_escapes_names_and_shows_counts() {
        let lists = vec![list("<Groceries>", vec![("Milk", true), ("Eggs", false)])];
        let page = lists_page(&lists, &Flash::default());
        assert!(page.contains("&lt;Groceries&gt;"));
        assert!(!page.contains("<Groceries>"));
        assert!(page.contains("1 / 2"));
    }

    #[test]
    fn test_lists_page_orders_complete_lists_last() {
        let lists = vec![
            list("Done", vec![("x", true)]),
            list("Open", vec![("y", false)]),
        ];
        let page = lists_page(&lists, &Flash::default());
        let open_at = page.find("Open").unwrap();
        let done_at = page.find("Done").unwrap();
        assert!(open_at < done_at);
        // Action links still use the storage index
        assert!(page.contains("href=\"/lists/0\">Done"));
    }

    #[test]
    fn test_list_page_action_links_use_storage_indices() {
        let todo_list = list("Groceries", vec![("Milk", true), ("Eggs", false)]);
        let page = list_page(3, &todo_list, &Flash::default());
        // Eggs renders first but Milk keeps targeting todo 0
        assert!(page.contains("/lists/3/todos/0\""));
        assert!(page.contains("/lists/3/todos/1\""));
        assert!(page.contains("/lists/3/todo_all"));
    }

    #[test]
    fn test_flash_messages_render_in_layout() {
        let flash = Flash {
            error: Some("Name already exists.".to_string()),
            success: Some("List created successfully.".to_string()),
        };
        let page = lists_page(&[], &flash);
        assert!(page.contains("class=\"flash error\">Name already exists."));
        assert!(page.contains("class=\"flash success\">List created successfully."));
    }

    #[test]
    fn test_new_list_page_refills_attempted_name() {
        let page = new_list_page(&Flash::error("Name already exists."), "Groceries");
        assert!(page.contains("value=\"Groceries\""));
    }

    #[test]
    fn test_empty_list_hides_complete_all() {
        let todo_list = list("Groceries", vec![]);
        let page = list_page(0, &todo_list, &Flash::default());
        assert!(!page.contains("todo_all"));
    }
}
