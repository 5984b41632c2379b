// src/es/args.rs
// Typed tool requests and their translation into es.exe argument vectors

use rmcp::schemars;
use serde::Deserialize;

fn default_max_results() -> u32 {
    50
}

/// Sort field accepted by `es.exe`'s `-sort-<field>-<direction>` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Name,
    Path,
    Size,
    Extension,
    DateCreated,
    DateModified,
    DateAccessed,
}

impl SortField {
    fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Path => "path",
            SortField::Size => "size",
            SortField::Extension => "extension",
            SortField::DateCreated => "date-created",
            SortField::DateModified => "date-modified",
            SortField::DateAccessed => "date-accessed",
        }
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[schemars(
        description = "Search query using Everything syntax (e.g., 'claude config', '*.js', 'ext:exe;dll size:>1mb')"
    )]
    pub query: String,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[schemars(description = "Use regular expression search")]
    #[serde(default)]
    pub regex: bool,
    #[schemars(description = "Match case")]
    #[serde(default)]
    pub case_sensitive: bool,
    #[schemars(description = "Match whole words only")]
    #[serde(default)]
    pub whole_word: bool,
    #[schemars(description = "Match full path and filename")]
    #[serde(default)]
    pub match_path: bool,
    #[schemars(description = "Return only folders")]
    #[serde(default)]
    pub folders_only: bool,
    #[schemars(description = "Return only files")]
    #[serde(default)]
    pub files_only: bool,
    #[schemars(
        description = "Sort results by: name, path, size, extension, date-created, date-modified, date-accessed"
    )]
    pub sort_by: Option<SortField>,
    #[schemars(description = "Sort in descending order")]
    #[serde(default)]
    pub sort_descending: bool,
    #[schemars(description = "Include file size in results")]
    #[serde(default)]
    pub show_size: bool,
    #[schemars(description = "Include date modified in results")]
    #[serde(default)]
    pub show_date_modified: bool,
    #[schemars(description = "Search only within this parent path")]
    pub parent_path: Option<String>,
}

impl SearchRequest {
    /// A request with only the query set and every other field at its
    /// schema default. Used by the CLI search subcommand and tests.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: default_max_results(),
            regex: false,
            case_sensitive: false,
            whole_word: false,
            match_path: false,
            folders_only: false,
            files_only: false,
            sort_by: None,
            sort_descending: false,
            show_size: false,
            show_date_modified: false,
            parent_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct GetFileInfoRequest {
    #[schemars(description = "Full path or filename to get information about")]
    pub filename: String,
}

/// Boolean search options, in the exact order es.exe expects them emitted.
/// One table + one loop keeps flag emission declarative and in one place.
const SEARCH_OPTION_FLAGS: &[(&str, fn(&SearchRequest) -> bool)] = &[
    ("-regex", |r| r.regex),
    ("-case", |r| r.case_sensitive),
    ("-whole-word", |r| r.whole_word),
    ("-match-path", |r| r.match_path),
];

/// Build the argument vector for a `search` call.
///
/// Order is fixed and significant: option flags, result limit, attribute
/// filters, parent path, sort, display columns, then the query as the final
/// token. The query goes through as one argv element, verbatim - no shell,
/// no quoting, no escaping.
pub fn search_args(req: &SearchRequest) -> Vec<String> {
    let mut argv = Vec::new();

    for (flag, enabled) in SEARCH_OPTION_FLAGS {
        if enabled(req) {
            argv.push((*flag).to_string());
        }
    }

    argv.push("-n".to_string());
    argv.push(req.max_results.to_string());

    // Both filters set is a pass-through: es.exe applies its own conflict rule.
    if req.folders_only {
        argv.push("/ad".to_string());
    }
    if req.files_only {
        argv.push("/a-d".to_string());
    }

    if let Some(parent) = &req.parent_path {
        argv.push("-parent-path".to_string());
        argv.push(parent.clone());
    }

    if let Some(sort) = req.sort_by {
        let direction = if req.sort_descending {
            "descending"
        } else {
            "ascending"
        };
        argv.push(format!("-sort-{}-{}", sort.as_str(), direction));
    }

    if req.show_size {
        argv.push("-size".to_string());
    }
    if req.show_date_modified {
        argv.push("-date-modified".to_string());
    }

    argv.push(req.query.clone());
    argv
}

/// Build the fixed argument vector for a `get_file_info` call: size, all
/// three dates, attributes, a single-result cap, then the filename last.
pub fn file_info_args(req: &GetFileInfoRequest) -> Vec<String> {
    vec![
        "-size".to_string(),
        "-date-created".to_string(),
        "-date-modified".to_string(),
        "-date-accessed".to_string(),
        "-attributes".to_string(),
        "-n".to_string(),
        "1".to_string(),
        req.filename.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_search_args() {
        let req = SearchRequest::with_query("*.js");
        assert_eq!(search_args(&req), vec!["-n", "50", "*.js"]);
    }

    #[test]
    fn test_query_is_always_last() {
        let mut req = SearchRequest::with_query("report.pdf");
        req.regex = true;
        req.show_size = true;
        req.sort_by = Some(SortField::Size);
        let argv = search_args(&req);
        assert_eq!(argv.last().map(String::as_str), Some("report.pdf"));
    }

    #[test]
    fn test_full_search_flag_order() {
        let req = SearchRequest {
            query: "config".to_string(),
            max_results: 10,
            regex: true,
            case_sensitive: true,
            whole_word: true,
            match_path: true,
            folders_only: true,
            files_only: true,
            sort_by: Some(SortField::DateModified),
            sort_descending: true,
            show_size: true,
            show_date_modified: true,
            parent_path: Some("C:\\Users".to_string()),
        };
        assert_eq!(
            search_args(&req),
            vec![
                "-regex",
                "-case",
                "-whole-word",
                "-match-path",
                "-n",
                "10",
                "/ad",
                "/a-d",
                "-parent-path",
                "C:\\Users",
                "-sort-date-modified-descending",
                "-size",
                "-date-modified",
                "config",
            ]
        );
    }

    #[test]
    fn test_sort_ascending_by_default() {
        let mut req = SearchRequest::with_query("x");
        req.sort_by = Some(SortField::Name);
        let argv = search_args(&req);
        assert!(argv.contains(&"-sort-name-ascending".to_string()));
    }

    #[test]
    fn test_sort_descending_without_field_emits_nothing() {
        let mut req = SearchRequest::with_query("x");
        req.sort_descending = true;
        let argv = search_args(&req);
        assert!(!argv.iter().any(|a| a.starts_with("-sort-")));
    }

    #[test]
    fn test_both_filters_pass_through() {
        let mut req = SearchRequest::with_query("x");
        req.folders_only = true;
        req.files_only = true;
        let argv = search_args(&req);
        let ad = argv.iter().position(|a| a == "/ad").unwrap();
        let a_d = argv.iter().position(|a| a == "/a-d").unwrap();
        assert!(ad < a_d);
    }

    #[test]
    fn test_query_passed_verbatim() {
        // A query full of shell metacharacters stays one untouched token.
        let req = SearchRequest::with_query("foo bar; rm -rf * $(pwd) \"baz\"");
        let argv = search_args(&req);
        assert_eq!(argv.last().unwrap(), "foo bar; rm -rf * $(pwd) \"baz\"");
    }

    #[test]
    fn test_builder_is_deterministic() {
        let mut req = SearchRequest::with_query("notes.txt");
        req.match_path = true;
        req.sort_by = Some(SortField::Path);
        assert_eq!(search_args(&req), search_args(&req));
    }

    #[test]
    fn test_file_info_fixed_sequence() {
        let req = GetFileInfoRequest {
            filename: "C:\\missing.txt".to_string(),
        };
        assert_eq!(
            file_info_args(&req),
            vec![
                "-size",
                "-date-created",
                "-date-modified",
                "-date-accessed",
                "-attributes",
                "-n",
                "1",
                "C:\\missing.txt",
            ]
        );
    }

    #[test]
    fn test_search_request_deserializes_camel_case() {
        let req: SearchRequest = serde_json::from_str(
            r#"{"query": "*.rs", "maxResults": 5, "caseSensitive": true, "sortBy": "date-created"}"#,
        )
        .unwrap();
        assert_eq!(req.query, "*.rs");
        assert_eq!(req.max_results, 5);
        assert!(req.case_sensitive);
        assert_eq!(req.sort_by, Some(SortField::DateCreated));
        assert!(!req.regex);
    }

    #[test]
    fn test_search_request_missing_query_rejected() {
        let result = serde_json::from_str::<SearchRequest>(r#"{"maxResults": 5}"#);
        assert!(result.is_err());
    }
}
