//! TriG parser that emits to QuadSink.
//!
//! Parses TriG syntax (Turtle plus named graph blocks) and emits quad
//! events to a QuadSink implementation. Triples outside any block, and
//! inside an unlabeled `{ ... }` block, land in the default graph.

use std::collections::HashMap;

use valeros_graph_ir::vocab::rdf;
use valeros_graph_ir::{Datatype, LiteralValue, QuadSink, TermId};

use crate::error::{Result, TrigError};
use crate::lex::{tokenize, Token, TokenKind};

/// TriG parser state.
pub struct Parser<'a, S> {
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
}

impl<'a, S: QuadSink> Parser<'a, S> {
    /// Create a new parser.
    pub fn new(input: &str, sink: &'a mut S) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            sink,
            prefixes: HashMap::new(),
            base: None,
        })
    }

    /// Parse the entire TriG document.
    pub fn parse(mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Peek at the token after the current one.
    fn next_kind(&self) -> &TokenKind {
        let next = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[next].kind
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(TrigError::parse(
                self.current().start,
                format!("expected {:?}, found {:?}", kind, self.current().kind),
            ))
        }
    }

    /// Parse a single top-level statement: directive, graph block, or triples.
    fn parse_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::KwGraph => {
                self.advance(); // consume GRAPH
                let label = self.parse_graph_label()?;
                self.parse_wrapped_graph(Some(label))
            }
            // Unlabeled block: triples in the default graph
            TokenKind::LBrace => self.parse_wrapped_graph(None),
            TokenKind::Eof => Ok(()),
            _ => self.parse_triples_or_graph(),
        }
    }

    /// Parse @prefix or PREFIX directive.
    fn parse_prefix_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlPrefix);
        self.advance(); // consume @prefix or PREFIX

        let prefix = match &self.current().kind {
            TokenKind::PrefixedNameNs(p) => p.to_string(),
            _ => {
                return Err(TrigError::parse(
                    self.current().start,
                    "expected prefix namespace",
                ))
            }
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(iri) => self.resolve_iri(iri)?,
            _ => {
                return Err(TrigError::parse(
                    self.current().start,
                    "expected IRI for prefix namespace",
                ))
            }
        };
        self.advance();

        self.sink.on_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);

        // Trailing dot is required for @prefix, absent for PREFIX
        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    /// Parse @base or BASE directive.
    fn parse_base_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlBase);
        self.advance(); // consume @base or BASE

        let base_iri = match &self.current().kind {
            TokenKind::Iri(iri) => iri.to_string(),
            _ => {
                return Err(TrigError::parse(
                    self.current().start,
                    "expected IRI for base",
                ))
            }
        };
        self.advance();

        self.sink.on_base(&base_iri);
        self.base = Some(base_iri);

        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    /// Parse either a named graph block (`<g> { ... }`) or a top-level
    /// triple statement. The two are distinguished by one token of
    /// lookahead: a graph label is a single IRI / prefixed name / blank
    /// node token followed by `{`.
    fn parse_triples_or_graph(&mut self) -> Result<()> {
        let labelish = matches!(
            self.current().kind,
            TokenKind::Iri(_)
                | TokenKind::PrefixedName { .. }
                | TokenKind::PrefixedNameNs(_)
                | TokenKind::BlankNodeLabel(_)
                | TokenKind::Anon
        );

        if labelish && matches!(self.next_kind(), TokenKind::LBrace) {
            let label = self.parse_graph_label()?;
            return self.parse_wrapped_graph(Some(label));
        }

        let subject = self.parse_subject()?;
        self.parse_predicate_object_list(subject)?;
        self.expect(&TokenKind::Dot)?;

        Ok(())
    }

    /// Parse a graph label: IRI, prefixed name, or blank node.
    fn parse_graph_label(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label)))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            _ => Err(TrigError::parse(
                self.current().start,
                format!("expected graph label, found {:?}", self.current().kind),
            )),
        }
    }

    /// Parse a `{ ... }` block. With a label the contained triples land in
    /// that named graph; without one they stay in the default graph.
    fn parse_wrapped_graph(&mut self, label: Option<TermId>) -> Result<()> {
        self.expect(&TokenKind::LBrace)?;

        if let Some(label) = label {
            self.sink.begin_graph(label);
        }

        while !matches!(self.current().kind, TokenKind::RBrace | TokenKind::Eof) {
            let subject = self.parse_subject()?;
            self.parse_predicate_object_list(subject)?;

            // The dot before `}` is optional
            if matches!(self.current().kind, TokenKind::Dot) {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(&TokenKind::RBrace)?;

        if label.is_some() {
            self.sink.end_graph();
        }

        Ok(())
    }

    /// Parse a subject term.
    fn parse_subject(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label)))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            _ => Err(TrigError::parse(
                self.current().start,
                format!("expected subject, found {:?}", self.current().kind),
            )),
        }
    }

    /// Parse a predicate-object list.
    fn parse_predicate_object_list(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, predicate)?;

            if matches!(self.current().kind, TokenKind::Semicolon) {
                self.advance();
                // Semicolon can be followed by another predicate or end
                if matches!(
                    self.current().kind,
                    TokenKind::Dot | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Eof
                ) {
                    break;
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parse a predicate.
    fn parse_predicate(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::KwA => {
                self.advance();
                Ok(self.sink.term_iri(rdf::TYPE))
            }
            _ => Err(TrigError::parse(
                self.current().start,
                format!("expected predicate, found {:?}", self.current().kind),
            )),
        }
    }

    /// Parse an object list (comma-separated objects).
    fn parse_object_list(&mut self, subject: TermId, predicate: TermId) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.sink.emit_quad(subject, predicate, object);

            if matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parse an object term.
    fn parse_object(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(self.sink.term_iri(&resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(self.sink.term_iri(&iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label)))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_)
            | TokenKind::KwTrue
            | TokenKind::KwFalse => self.parse_literal(),
            _ => Err(TrigError::parse(
                self.current().start,
                format!("expected object, found {:?}", self.current().kind),
            )),
        }
    }

    /// Parse a literal (string with optional language tag or datatype).
    fn parse_literal(&mut self) -> Result<TermId> {
        match &self.current().kind.clone() {
            TokenKind::String(value) => {
                let value = value.clone();
                self.advance();

                match &self.current().kind.clone() {
                    TokenKind::LangTag(lang) => {
                        let lang = lang.clone();
                        self.advance();
                        Ok(self
                            .sink
                            .term_literal(&value, Datatype::rdf_lang_string(), Some(&lang)))
                    }
                    TokenKind::DoubleCaret => {
                        self.advance();
                        let datatype_iri = self.parse_datatype_iri()?;
                        let datatype = Datatype::from_iri(&datatype_iri);
                        Ok(self.sink.term_literal(&value, datatype, None))
                    }
                    _ => Ok(self.sink.term_literal(&value, Datatype::xsd_string(), None)),
                }
            }
            TokenKind::Integer(n) => {
                let n = *n;
                self.advance();
                Ok(self
                    .sink
                    .term_literal_value(LiteralValue::Integer(n), Datatype::xsd_integer()))
            }
            TokenKind::Decimal(s) => {
                let s = s.clone();
                self.advance();
                Ok(self.sink.term_literal(&s, Datatype::xsd_decimal(), None))
            }
            TokenKind::Double(n) => {
                let n = *n;
                self.advance();
                Ok(self
                    .sink
                    .term_literal_value(LiteralValue::Double(n), Datatype::xsd_double()))
            }
            TokenKind::KwTrue => {
                self.advance();
                Ok(self
                    .sink
                    .term_literal_value(LiteralValue::Boolean(true), Datatype::xsd_boolean()))
            }
            TokenKind::KwFalse => {
                self.advance();
                Ok(self
                    .sink
                    .term_literal_value(LiteralValue::Boolean(false), Datatype::xsd_boolean()))
            }
            _ => Err(TrigError::parse(
                self.current().start,
                format!("expected literal, found {:?}", self.current().kind),
            )),
        }
    }

    /// Parse a datatype IRI after ^^.
    fn parse_datatype_iri(&mut self) -> Result<String> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(resolved)
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(iri)
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(iri)
            }
            _ => Err(TrigError::parse(
                self.current().start,
                format!("expected datatype IRI, found {:?}", self.current().kind),
            )),
        }
    }

    /// Parse a blank node property list: `[ predicate object ; ... ]`
    fn parse_blank_node_property_list(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LBracket)?;

        let bnode = self.sink.term_blank(None);

        if !matches!(self.current().kind, TokenKind::RBracket) {
            self.parse_predicate_object_list(bnode)?;
        }

        self.expect(&TokenKind::RBracket)?;

        Ok(bnode)
    }

    /// Parse a collection (RDF list): `( item1 item2 ... )`
    fn parse_collection(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LParen)?;

        if matches!(self.current().kind, TokenKind::RParen) {
            self.advance();
            return Ok(self.sink.term_iri(rdf::NIL));
        }

        let rdf_first = self.sink.term_iri(rdf::FIRST);
        let rdf_rest = self.sink.term_iri(rdf::REST);
        let rdf_nil = self.sink.term_iri(rdf::NIL);

        let first_node = self.sink.term_blank(None);
        let mut current_node = first_node;

        loop {
            let item = self.parse_object()?;
            self.sink.emit_quad(current_node, rdf_first, item);

            if matches!(self.current().kind, TokenKind::RParen) {
                self.sink.emit_quad(current_node, rdf_rest, rdf_nil);
                break;
            } else {
                let next_node = self.sink.term_blank(None);
                self.sink.emit_quad(current_node, rdf_rest, next_node);
                current_node = next_node;
            }
        }

        self.expect(&TokenKind::RParen)?;

        Ok(first_node)
    }

    /// Resolve a potentially relative IRI against the base (RFC3986 §5).
    fn resolve_iri(&self, reference: &str) -> Result<String> {
        if reference.is_empty() {
            return match &self.base {
                Some(base) => Ok(base.clone()),
                None => Err(TrigError::IriResolution(
                    "empty IRI reference without base".to_string(),
                )),
            };
        }

        if has_scheme(reference) {
            return Ok(reference.to_string());
        }

        match &self.base {
            Some(base) => Ok(resolve_reference(base, reference)),
            None => Err(TrigError::IriResolution(format!(
                "relative IRI '{}' without base",
                reference
            ))),
        }
    }

    /// Expand a prefixed name to a full IRI.
    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{}{}", namespace, local)),
            None => Err(TrigError::UndefinedPrefix(prefix.to_string())),
        }
    }
}

// =============================================================================
// RFC3986 reference resolution helpers
// =============================================================================

/// Check whether the reference begins with a URI scheme.
fn has_scheme(reference: &str) -> bool {
    match reference.find(':') {
        Some(pos) if pos > 0 => {
            let scheme = &reference[..pos];
            scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Split an IRI into (scheme, authority, path, query) components.
fn split_iri(iri: &str) -> (&str, Option<&str>, &str, Option<&str>) {
    let (scheme, rest) = match iri.find(':') {
        Some(pos) => (&iri[..pos], &iri[pos + 1..]),
        None => ("", iri),
    };

    let (authority, path_query) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c| c == '/' || c == '?' || c == '#')
                .unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    let (path, query) = split_path_query(path_query);
    (scheme, authority, path, query)
}

/// Split a path from its query, dropping any fragment.
fn split_path_query(s: &str) -> (&str, Option<&str>) {
    let s = match s.find('#') {
        Some(pos) => &s[..pos],
        None => s,
    };
    match s.find('?') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

/// Remove dot segments from a path (RFC3986 §5.2.4).
fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "." => {}
            ".." => {
                output.pop();
            }
            s => output.push(s),
        }
    }

    let result = output.join("/");
    if path.starts_with('/') && !result.starts_with('/') {
        format!("/{}", result)
    } else {
        result
    }
}

/// Transform a relative reference against an absolute base (RFC3986 §5.2.2).
fn resolve_reference(base: &str, reference: &str) -> String {
    let (base_scheme, base_authority, base_path, _) = split_iri(base);

    let (authority, path, query) = if let Some(after) = reference.strip_prefix("//") {
        // Reference carries its own authority
        let end = after
            .find(|c| c == '/' || c == '?' || c == '#')
            .unwrap_or(after.len());
        let (ref_path, ref_query) = split_path_query(&after[end..]);
        (
            Some(after[..end].to_string()),
            remove_dot_segments(ref_path),
            ref_query.map(str::to_string),
        )
    } else if reference.starts_with('/') {
        let (ref_path, ref_query) = split_path_query(reference);
        (
            base_authority.map(str::to_string),
            remove_dot_segments(ref_path),
            ref_query.map(str::to_string),
        )
    } else if let Some(q) = reference.strip_prefix('?') {
        (
            base_authority.map(str::to_string),
            base_path.to_string(),
            Some(split_path_query(q).0.to_string()),
        )
    } else if reference.starts_with('#') {
        (
            base_authority.map(str::to_string),
            base_path.to_string(),
            None,
        )
    } else {
        // Relative path: merge with the base path's directory
        let (ref_path, ref_query) = split_path_query(reference);
        let merged = if base_authority.is_some() && base_path.is_empty() {
            format!("/{}", ref_path)
        } else {
            let base_dir = match base_path.rfind('/') {
                Some(pos) => &base_path[..=pos],
                None => "",
            };
            format!("{}{}", base_dir, ref_path)
        };
        (
            base_authority.map(str::to_string),
            remove_dot_segments(&merged),
            ref_query.map(str::to_string),
        )
    };

    let mut result = String::new();
    result.push_str(base_scheme);
    result.push(':');
    if let Some(auth) = authority {
        result.push_str("//");
        result.push_str(&auth);
    }
    result.push_str(&path);
    if let Some(q) = query {
        result.push('?');
        result.push_str(&q);
    }
    result
}

/// Parse a TriG document into QuadSink events.
pub fn parse<S: QuadSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use valeros_graph_ir::{Dataset, DatasetCollectorSink, Term};

    fn parse_to_dataset(input: &str) -> Result<Dataset> {
        let mut sink = DatasetCollectorSink::new();
        parse(input, &mut sink)?;
        Ok(sink.finish())
    }

    #[test]
    fn test_simple_triple_default_graph() {
        let input = r#"<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" ."#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 1);
        let quad = ds.iter().next().unwrap();
        assert_eq!(quad.s.as_iri(), Some("http://example.org/alice"));
        assert_eq!(quad.p.as_iri(), Some("http://xmlns.com/foaf/0.1/name"));
        assert!(quad.g.is_default());
    }

    #[test]
    fn test_named_graph_block() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:g {
                ex:alice ex:name "Alice" ;
                         ex:age 30 .
            }
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 2);
        for quad in ds.iter() {
            assert_eq!(
                quad.g.as_term().and_then(|t| t.as_iri()),
                Some("http://example.org/g")
            );
        }
    }

    #[test]
    fn test_graph_keyword_form() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            GRAPH ex:g { ex:alice ex:name "Alice" . }
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(
            ds.iter().next().unwrap().g.as_term().and_then(|t| t.as_iri()),
            Some("http://example.org/g")
        );
    }

    #[test]
    fn test_unlabeled_block_is_default_graph() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            { ex:alice ex:name "Alice" . }
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 1);
        assert!(ds.iter().next().unwrap().g.is_default());
    }

    #[test]
    fn test_mixed_default_and_named_graphs() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice" .
            ex:g1 { ex:bob ex:name "Bob" . }
            ex:carol ex:name "Carol" .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        let quads: Vec<_> = ds.iter().collect();
        assert_eq!(quads.len(), 3);
        assert!(quads[0].g.is_default());
        assert!(!quads[1].g.is_default());
        assert!(quads[2].g.is_default());
    }

    #[test]
    fn test_blank_node_graph_label() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            _:g { ex:alice ex:name "Alice" . }
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 1);
        assert!(ds.iter().next().unwrap().g.as_term().unwrap().is_blank());
    }

    #[test]
    fn test_final_dot_optional_before_brace() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:g { ex:alice ex:name "Alice" }
        "#;
        let ds = parse_to_dataset(input).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_empty_graph_block() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:g { }
        "#;
        let ds = parse_to_dataset(input).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_a_keyword() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice a ex:Person .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.iter().next().unwrap().p.as_iri(), Some(rdf::TYPE));
    }

    #[test]
    fn test_semicolon_and_comma_syntax() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice" ;
                     ex:knows ex:bob, ex:carol .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_typed_literal() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:alice ex:birthdate "2000-01-01"^^xsd:date .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        let quad = ds.iter().next().unwrap();
        let (_, dt, _) = quad.o.as_literal().unwrap();
        assert_eq!(dt.as_iri(), "http://www.w3.org/2001/XMLSchema#date");
    }

    #[test]
    fn test_language_tagged_literal() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice"@en .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        let quad = ds.iter().next().unwrap();
        let (_, _, lang) = quad.o.as_literal().unwrap();
        assert_eq!(lang, Some("en"));
    }

    #[test]
    fn test_numeric_and_boolean_literals() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:age 30 ;
                     ex:height 1.7 ;
                     ex:mass 6.2e1 ;
                     ex:active true .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        let objects: Vec<_> = ds.iter().map(|q| q.o.clone()).collect();
        assert!(
            matches!(&objects[0], Term::Literal { value: LiteralValue::Integer(30), .. })
        );
        assert!(matches!(&objects[1], Term::Literal { value: LiteralValue::String(s), .. } if s.as_ref() == "1.7"));
        assert!(
            matches!(&objects[2], Term::Literal { value: LiteralValue::Double(d), .. } if *d == 62.0)
        );
        assert!(
            matches!(&objects[3], Term::Literal { value: LiteralValue::Boolean(true), .. })
        );
    }

    #[test]
    fn test_blank_node_property_list() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:knows [ ex:name "Bob" ] .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        // alice knows _:b, plus _:b name "Bob"
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_property_list_inside_graph_inherits_graph() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:g { ex:alice ex:knows [ ex:name "Bob" ] . }
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(ds.len(), 2);
        for quad in ds.iter() {
            assert!(!quad.g.is_default());
        }
    }

    #[test]
    fn test_collection() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:friends ( ex:bob ex:carol ) .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        // 2 first/rest pairs plus the linking triple
        assert_eq!(ds.len(), 5);
    }

    #[test]
    fn test_sparql_prefix_syntax() {
        let input = r#"
            PREFIX ex: <http://example.org/>
            ex:alice ex:name "Alice" .
        "#;
        let ds = parse_to_dataset(input).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_base_iri_resolution() {
        let input = r#"
            @base <http://example.org/path/> .
            <alice> <name> "Alice" .
            <../bob> <name> "Bob" .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        let quads: Vec<_> = ds.iter().collect();
        assert_eq!(quads[0].s.as_iri(), Some("http://example.org/path/alice"));
        assert_eq!(quads[0].p.as_iri(), Some("http://example.org/path/name"));
        // ../bob resolves one level up
        assert_eq!(quads[1].s.as_iri(), Some("http://example.org/bob"));
    }

    #[test]
    fn test_empty_iri_resolves_to_base() {
        let input = r#"
            @base <http://example.org/doc> .
            <> <name> "The Document" .
        "#;
        let ds = parse_to_dataset(input).unwrap();

        assert_eq!(
            ds.iter().next().unwrap().s.as_iri(),
            Some("http://example.org/doc")
        );
    }

    #[test]
    fn test_relative_iri_without_base_fails() {
        let result = parse_to_dataset(r#"<alice> <name> "Alice" ."#);
        assert!(matches!(result, Err(TrigError::IriResolution(_))));
    }

    #[test]
    fn test_undefined_prefix_fails() {
        let result = parse_to_dataset(r#"nope:alice nope:name "Alice" ."#);
        assert!(matches!(result, Err(TrigError::UndefinedPrefix(_))));
    }
}
