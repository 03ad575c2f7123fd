// src/dev/oracle.rs
// Reference matcher via Brzozowski derivatives over a throwaway syntax tree.
// Deliberately shares nothing with the position-set pipeline: its own
// recursive-descent parser, its own nullability, so a bug in one side cannot
// hide in the other.

use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    /// The empty language (only arises from derivatives).
    Never,
    Epsilon,
    Sym(char),
    Union(Box<Regex>, Box<Regex>),
    Concat(Box<Regex>, Box<Regex>),
    Star(Box<Regex>),
}

// Smart constructors keep derivative terms from snowballing.
fn union(a: Regex, b: Regex) -> Regex {
    match (a, b) {
        (Regex::Never, r) | (r, Regex::Never) => r,
        (a, b) if a == b => a,
        (a, b) => Regex::Union(Box::new(a), Box::new(b)),
    }
}

fn concat(a: Regex, b: Regex) -> Regex {
    match (a, b) {
        (Regex::Never, _) | (_, Regex::Never) => Regex::Never,
        (Regex::Epsilon, r) | (r, Regex::Epsilon) => r,
        (a, b) => Regex::Concat(Box::new(a), Box::new(b)),
    }
}

impl Regex {
    /// Parse the same surface grammar the pipeline scans: letters, `$`,
    /// `|`, `*`, parens, explicit `.` or adjacency for concatenation.
    /// Empty input parses as epsilon.
    pub fn parse(expr: &str) -> Option<Regex> {
        if expr.is_empty() {
            return Some(Regex::Epsilon);
        }
        let mut p = Parser {
            chars: expr.chars().collect(),
            at: 0,
        };
        let r = p.union_level()?;
        (p.at == p.chars.len()).then_some(r)
    }

    pub fn nullable(&self) -> bool {
        match self {
            Regex::Never | Regex::Sym(_) => false,
            Regex::Epsilon | Regex::Star(_) => true,
            Regex::Union(a, b) => a.nullable() || b.nullable(),
            Regex::Concat(a, b) => a.nullable() && b.nullable(),
        }
    }

    /// Derivative with respect to one input character.
    fn derive(&self, ch: char) -> Regex {
        match self {
            Regex::Never | Regex::Epsilon => Regex::Never,
            Regex::Sym(c) => {
                if *c == ch {
                    Regex::Epsilon
                } else {
                    Regex::Never
                }
            }
            Regex::Union(a, b) => union(a.derive(ch), b.derive(ch)),
            Regex::Concat(a, b) => {
                let left = concat(a.derive(ch), (**b).clone());
                if a.nullable() {
                    union(left, b.derive(ch))
                } else {
                    left
                }
            }
            Regex::Star(a) => concat(a.derive(ch), Regex::Star(a.clone())),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        let mut cur = self.clone();
        for ch in input.chars() {
            cur = cur.derive(ch);
            if cur == Regex::Never {
                return false;
            }
        }
        cur.nullable()
    }

    /// Sample one string this expression generates (stars repeat 0..=3).
    pub fn sample<R: Rng>(&self, rng: &mut R, out: &mut String) {
        match self {
            Regex::Never | Regex::Epsilon => {}
            Regex::Sym(c) => out.push(*c),
            Regex::Union(a, b) => {
                if rng.random_bool(0.5) {
                    a.sample(rng, out)
                } else {
                    b.sample(rng, out)
                }
            }
            Regex::Concat(a, b) => {
                a.sample(rng, out);
                b.sample(rng, out);
            }
            Regex::Star(a) => {
                for _ in 0..rng.random_range(0..=3) {
                    a.sample(rng, out);
                }
            }
        }
    }
}

struct Parser {
    chars: Vec<char>,
    at: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.at).copied()
    }

    fn union_level(&mut self) -> Option<Regex> {
        let mut r = self.concat_level()?;
        while self.peek() == Some('|') {
            self.at += 1;
            r = Regex::Union(Box::new(r), Box::new(self.concat_level()?));
        }
        Some(r)
    }

    fn concat_level(&mut self) -> Option<Regex> {
        let mut r = self.starred_atom()?;
        loop {
            match self.peek() {
                Some('.') => {
                    self.at += 1;
                    r = Regex::Concat(Box::new(r), Box::new(self.starred_atom()?));
                }
                Some(c) if c == '(' || c == '$' || c.is_ascii_alphabetic() => {
                    r = Regex::Concat(Box::new(r), Box::new(self.starred_atom()?));
                }
                _ => break,
            }
        }
        Some(r)
    }

    fn starred_atom(&mut self) -> Option<Regex> {
        let mut r = self.atom()?;
        while self.peek() == Some('*') {
            self.at += 1;
            r = Regex::Star(Box::new(r));
        }
        Some(r)
    }

    fn atom(&mut self) -> Option<Regex> {
        match self.peek()? {
            '(' => {
                self.at += 1;
                let r = self.union_level()?;
                if self.peek() == Some(')') {
                    self.at += 1;
                    Some(r)
                } else {
                    None
                }
            }
            '$' => {
                self.at += 1;
                Some(Regex::Epsilon)
            }
            c if c.is_ascii_alphabetic() => {
                self.at += 1;
                Some(Regex::Sym(c))
            }
            _ => None,
        }
    }
}
