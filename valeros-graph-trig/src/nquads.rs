//! Line-based N-Quads / N-Triples writers.
//!
//! Both writers emit one statement per line in source order, with string
//! escaping per the N-Triples grammar. `write_ntriples` drops the graph
//! component (the usual TriG-to-NT flattening); `write_nquads` keeps it.

use valeros_graph_ir::{Dataset, GraphName, Term};

/// Serialize a dataset as N-Triples, discarding graph labels.
pub fn write_ntriples(dataset: &Dataset) -> String {
    let mut out = String::new();
    for quad in dataset.iter() {
        write_term(&mut out, &quad.s);
        out.push(' ');
        write_term(&mut out, &quad.p);
        out.push(' ');
        write_term(&mut out, &quad.o);
        out.push_str(" .\n");
    }
    out
}

/// Serialize a dataset as N-Quads, keeping graph labels (default-graph
/// statements are written without one).
pub fn write_nquads(dataset: &Dataset) -> String {
    let mut out = String::new();
    for quad in dataset.iter() {
        write_term(&mut out, &quad.s);
        out.push(' ');
        write_term(&mut out, &quad.p);
        out.push(' ');
        write_term(&mut out, &quad.o);
        if let GraphName::Named(g) = &quad.g {
            out.push(' ');
            write_term(&mut out, g);
        }
        out.push_str(" .\n");
    }
    out
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Term::BlankNode(id) => {
            out.push_str("_:");
            out.push_str(id.as_str());
        }
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            out.push('"');
            escape_into(out, &value.lexical());
            out.push('"');
            if let Some(lang) = language {
                out.push('@');
                out.push_str(lang);
            } else if !datatype.is_xsd_string() {
                out.push_str("^^<");
                out.push_str(datatype.as_iri());
                out.push('>');
            }
        }
    }
}

/// Escape a literal lexical form per the N-Triples STRING_LITERAL_QUOTE rules.
fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
}
