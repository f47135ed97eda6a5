//! Built-in language descriptors.

use super::Language;

const C_LINE: Option<&str> = Some(r"//");
const C_BLOCK_START: Option<&str> = Some(r"/\*");
const C_BLOCK_END: Option<&str> = Some(r"\*/");

const fn c_style(name: &'static str, extensions: &'static [&'static str]) -> Language {
    Language {
        name,
        extensions,
        line_comment: C_LINE,
        block_start: C_BLOCK_START,
        block_end: C_BLOCK_END,
    }
}

const fn line_only(name: &'static str, extensions: &'static [&'static str], marker: &'static str) -> Language {
    Language {
        name,
        extensions,
        line_comment: Some(marker),
        block_start: None,
        block_end: None,
    }
}

const fn block_only(
    name: &'static str,
    extensions: &'static [&'static str],
    start: &'static str,
    end: &'static str,
) -> Language {
    Language {
        name,
        extensions,
        line_comment: None,
        block_start: Some(start),
        block_end: Some(end),
    }
}

const fn line_and_block(
    name: &'static str,
    extensions: &'static [&'static str],
    line: &'static str,
    start: &'static str,
    end: &'static str,
) -> Language {
    Language {
        name,
        extensions,
        line_comment: Some(line),
        block_start: Some(start),
        block_end: Some(end),
    }
}

pub static BUILTIN_LANGUAGES: &[Language] = &[
    // C family
    c_style("C", &[".c", ".h"]),
    c_style("C++", &[".cpp", ".cc", ".cxx", ".c++", ".hpp", ".hh", ".hxx"]),
    c_style("C#", &[".cs"]),
    c_style("Objective-C", &[".m", ".mm"]),
    c_style("Go", &[".go"]),
    c_style("Java", &[".java"]),
    c_style("JavaScript", &[".js", ".jsx", ".mjs", ".cjs"]),
    c_style("TypeScript", &[".ts", ".tsx", ".mts", ".cts"]),
    c_style("Rust", &[".rs"]),
    c_style("Swift", &[".swift"]),
    c_style("Kotlin", &[".kt", ".kts"]),
    c_style("Scala", &[".scala", ".sc"]),
    c_style("Dart", &[".dart"]),
    c_style("Groovy", &[".groovy", ".gvy", ".gy", ".gsh"]),
    c_style("PHP", &[".php"]),
    c_style("ProtocolBuffer", &[".proto"]),
    c_style("Vue", &[".vue"]),
    c_style("Zig", &[".zig"]),
    // Stylesheets
    block_only("CSS", &[".css"], r"/\*", r"\*/"),
    block_only("LESS", &[".less"], r"/\*", r"\*/"),
    c_style("SASS", &[".sass", ".scss"]),
    c_style("Stylus", &[".styl"]),
    // Markup and templates
    block_only("HTML", &[".html", ".htm", ".xhtml"], r"<!--", r"-->"),
    block_only("XML", &[".xml", ".xsd", ".xsl", ".xslt", ".svg"], r"<!--", r"-->"),
    block_only("Handlebars", &[".handlebars", ".hbs"], r"\{\{!", r"\}\}"),
    block_only("Mustache", &[".mustache"], r"\{\{!", r"\}\}"),
    // Hash comments
    line_and_block("Python", &[".py", ".pyw", ".pyi"], r"#", r#""{3}|'{3}"#, r#""{3}|'{3}"#),
    line_and_block("Ruby", &[".rb", ".rake", ".gemspec"], r"#", r"^=begin", r"^=end"),
    line_and_block(
        "Perl",
        &[".pl", ".pm"],
        r"#",
        r"^=(?:pod|head\d|begin|over|item|for|encoding)",
        r"^=cut",
    ),
    line_and_block("CoffeeScript", &[".coffee"], r"#", r"#{3}", r"#{3}"),
    line_and_block("Julia", &[".jl"], r"#", r"#=", r"=#"),
    line_and_block("Nim", &[".nim"], r"#", r"#\[", r"\]#"),
    line_only("Shell", &[".sh", ".bash", ".zsh", ".fish"], r"#"),
    line_only("Elixir", &[".ex", ".exs"], r"#"),
    line_only("R", &[".r"], r"#"),
    line_only("TOML", &[".toml"], r"#"),
    line_only("YAML", &[".yml", ".yaml"], r"#"),
    line_only("PowerShell", &[".ps1", ".psm1", ".psd1"], r"#"),
    // Dash comments
    line_and_block("Haskell", &[".hs"], r"--", r"\{-", r"-\}"),
    line_and_block("Elm", &[".elm"], r"--", r"\{-", r"-\}"),
    line_and_block("SQL", &[".sql"], r"--", r"/\*", r"\*/"),
    line_and_block("AppleScript", &[".applescript"], r"--", r"\(\*", r"\*\)"),
    line_only("Ada", &[".adb", ".ads"], r"--"),
    line_only("Lua", &[".lua"], r"--"),
    // Lisp family
    line_only("Clojure", &[".clj", ".cljc", ".edn"], r";"),
    line_only("ClojureScript", &[".cljs"], r";"),
    line_and_block("Racket", &[".rkt"], r";", r"#\|", r"\|#"),
    line_only("Emacs Lisp", &[".el"], r";"),
    // Others
    block_only("OCaml", &[".ml", ".mli"], r"\(\*", r"\*\)"),
    line_and_block("Pascal", &[".pas", ".pp", ".dpr"], r"//", r"\{", r"\}"),
    line_only("Erlang", &[".erl", ".hrl"], r"%"),
    line_only("Fortran", &[".f", ".f90", ".f95", ".for"], r"!"),
    line_only("Assembly", &[".asm", ".s"], r";"),
    line_only("WebAssembly", &[".wat"], r";;"),
];
