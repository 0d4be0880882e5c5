use scraper::{ElementRef, Html, Selector};

/// A single named form control with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// The control's `name` attribute.
    pub name: String,
    /// The control's current value.
    pub value: String,
}

/// A named HTML form lifted out of a fetched page.
///
/// A `Form` captures the state the server rendered into the page, hidden
/// fields included, so a submission looks like the browser posting the form
/// back. Forms are cheap to clone; callers that cache one as a template
/// clone it before setting per-request values.
#[derive(Debug, Clone)]
pub struct Form {
    /// The form's `name` attribute.
    pub name: String,
    /// The form's `action` attribute (may be relative or empty).
    pub action: String,
    /// The form's declared method, uppercased; `GET` when absent.
    pub method: String,
    fields: Vec<FormField>,
    /// The first submit control, included in the click payload.
    submit: Option<FormField>,
}

impl Form {
    /// Set a field to a value, appending the field if the form does not
    /// have it yet.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(FormField {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// The current value of a field, if the form has it.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// All non-submit fields, in document order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// The click payload: every field plus the submit control, as the pairs
    /// a browser would send when the form's submit button is clicked.
    pub fn payload(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        if let Some(submit) = &self.submit {
            pairs.push((submit.name.clone(), submit.value.clone()));
        }
        pairs
    }
}

/// Locate a form by its `name` attribute in an HTML document.
///
/// Returns `None` when no form carries that name. Unnamed controls are
/// skipped; unchecked checkboxes and radios contribute nothing, selects
/// contribute their selected (or first) option, and the first submit
/// control is kept aside for the click payload.
pub fn find_form(html: &str, name: &str) -> Option<Form> {
    let document = Html::parse_document(html);
    let form_selector = Selector::parse("form").expect("static selector");

    document
        .select(&form_selector)
        .find(|el| el.value().attr("name") == Some(name))
        .map(|el| lift_form(el, name))
}

fn lift_form(form_el: ElementRef<'_>, name: &str) -> Form {
    let control_selector = Selector::parse("input, select, textarea").expect("static selector");
    let option_selector = Selector::parse("option").expect("static selector");

    let mut fields = Vec::new();
    let mut submit = None;

    for control in form_el.select(&control_selector) {
        let element = control.value();
        let Some(field_name) = element.attr("name") else {
            continue;
        };

        match element.name() {
            "input" => {
                let input_type = element
                    .attr("type")
                    .unwrap_or("text")
                    .to_ascii_lowercase();
                match input_type.as_str() {
                    "submit" | "image" => {
                        if submit.is_none() {
                            submit = Some(FormField {
                                name: field_name.to_string(),
                                value: element.attr("value").unwrap_or("").to_string(),
                            });
                        }
                    }
                    "button" | "reset" | "file" => {}
                    "checkbox" | "radio" => {
                        if element.attr("checked").is_some() {
                            fields.push(FormField {
                                name: field_name.to_string(),
                                value: element.attr("value").unwrap_or("on").to_string(),
                            });
                        }
                    }
                    _ => fields.push(FormField {
                        name: field_name.to_string(),
                        value: element.attr("value").unwrap_or("").to_string(),
                    }),
                }
            }
            "select" => {
                let selected = control
                    .select(&option_selector)
                    .find(|opt| opt.value().attr("selected").is_some())
                    .or_else(|| control.select(&option_selector).next());
                if let Some(option) = selected {
                    let value = match option.value().attr("value") {
                        Some(v) => v.to_string(),
                        None => option.text().collect::<String>().trim().to_string(),
                    };
                    fields.push(FormField {
                        name: field_name.to_string(),
                        value,
                    });
                }
            }
            "textarea" => fields.push(FormField {
                name: field_name.to_string(),
                value: control.text().collect::<String>(),
            }),
            _ => {}
        }
    }

    Form {
        name: name.to_string(),
        action: form_el.value().attr("action").unwrap_or("").to_string(),
        method: form_el
            .value()
            .attr("method")
            .unwrap_or("GET")
            .to_ascii_uppercase(),
        fields,
        submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY_PAGE: &str = r#"
        <html><body>
        <form name="loginForm" method="POST" action="/do/login">
            <input type="text" name="principal" value="" />
            <input type="password" name="password" value="" />
        </form>
        <form name="accountHistoryForm" method="GET" action="/do/member/accountHistory">
            <input type="hidden" name="memberId" value="0" />
            <input type="hidden" name="typeId" value="5" />
            <input type="text" name="query(period).begin" value="" />
            <input type="text" name="query(period).end" value="" />
            <input type="text" name="query(transactionNumber)" value="" />
            <select name="query(pageSize)">
                <option value="25">25</option>
                <option value="50" selected>50</option>
            </select>
            <input type="checkbox" name="query(reversed)" value="true" />
            <input type="submit" name="querySubmit" value="Search" />
        </form>
        </body></html>
    "#;

    #[test]
    fn test_find_form_by_name() {
        let form = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();
        assert_eq!(form.name, "accountHistoryForm");
        assert_eq!(form.method, "GET");
        assert_eq!(form.action, "/do/member/accountHistory");
    }

    #[test]
    fn test_find_form_missing_name_is_none() {
        assert!(find_form(HISTORY_PAGE, "transferForm").is_none());
    }

    #[test]
    fn test_hidden_fields_are_captured() {
        let form = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();
        assert_eq!(form.value("memberId"), Some("0"));
        assert_eq!(form.value("typeId"), Some("5"));
    }

    #[test]
    fn test_select_takes_selected_option() {
        let form = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();
        assert_eq!(form.value("query(pageSize)"), Some("50"));
    }

    #[test]
    fn test_unchecked_checkbox_contributes_nothing() {
        let form = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();
        assert_eq!(form.value("query(reversed)"), None);
    }

    #[test]
    fn test_set_updates_and_appends() {
        let mut form = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();
        form.set("query(period).begin", "15/01/2020");
        assert_eq!(form.value("query(period).begin"), Some("15/01/2020"));

        form.set("extraField", "x");
        assert_eq!(form.value("extraField"), Some("x"));
    }

    #[test]
    fn test_payload_includes_submit_control() {
        let form = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();
        let payload = form.payload();
        assert!(payload.contains(&("querySubmit".to_string(), "Search".to_string())));
        assert!(payload.contains(&("memberId".to_string(), "0".to_string())));
    }

    #[test]
    fn test_clone_isolates_template() {
        let template = find_form(HISTORY_PAGE, "accountHistoryForm").unwrap();

        let mut first = template.clone();
        first.set("query(transactionNumber)", "TX123");

        let second = template.clone();
        assert_eq!(second.value("query(transactionNumber)"), Some(""));
        assert_eq!(template.value("query(transactionNumber)"), Some(""));
        assert_eq!(first.value("query(transactionNumber)"), Some("TX123"));
    }

    #[test]
    fn test_unnamed_controls_are_skipped() {
        let html = r#"<form name="f"><input type="text" value="orphan" /><input type="text" name="kept" value="v" /></form>"#;
        let form = find_form(html, "f").unwrap();
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.value("kept"), Some("v"));
    }
}
