//! Line-by-line parse driver
//!
//! Depth 0 declares an element, depth 1 commands apply to it directly and
//! depth 2 commands go into the loop opened by the last `L` command. A loop
//! closes at the next depth-1 line, the next element or the end of input.

use crate::command::{self, Command};
use crate::line::{self, ContentLine, LineKind};
use crate::looping::LoopBlock;
use crate::{expand, finalize, sprite};
use crate::{Diagnostic, DiagnosticKind, ParserConfig, Result, VariableTable};
use storyboard_core::{Animation, Element, Timeline};

/// Result of parsing one script
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    pub timeline: Timeline,
    /// Every skipped or suspicious line, in script order
    pub diagnostics: Vec<Diagnostic>,
}

/// Storyboard script parser
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses a whole script into a finalized timeline
    pub fn parse(&self, source: &str) -> ParseOutput {
        let mut state = ParseState::new(&self.config);
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);

        for (index, raw) in source.split('\n').enumerate() {
            state.feed(index + 1, raw);
        }

        let ParseState {
            elements,
            mut diagnostics,
            ..
        } = state.finish();

        let mut elements = expand::expand_animated_sprites(elements, &self.config);
        finalize::finalize(&mut elements, &mut diagnostics);

        tracing::debug!(
            "Parsed {} elements with {} diagnostics",
            elements.len(),
            diagnostics.len()
        );

        let mut timeline = Timeline::new(self.config.canvas_width, self.config.canvas_height);
        timeline.elements = elements;

        ParseOutput {
            timeline,
            diagnostics,
        }
    }
}

/// Loop opened by an `L` command, remembered with its source line
#[derive(Debug, Clone)]
struct OpenLoop {
    line: usize,
    text: String,
    block: LoopBlock,
}

/// Everything the driver carries from one line to the next
#[derive(Debug)]
pub struct ParseState<'c> {
    config: &'c ParserConfig,
    variables: VariableTable,
    elements: Vec<Element>,
    /// Index of the element commands attach to
    current: Option<usize>,
    open_loop: Option<OpenLoop>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> ParseState<'c> {
    pub fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            variables: VariableTable::new(),
            elements: Vec::new(),
            current: None,
            open_loop: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_open_loop(&self) -> bool {
        self.open_loop.is_some()
    }

    /// Processes one raw line; failures become diagnostics
    pub fn feed(&mut self, line_number: usize, raw: &str) {
        if let Err(err) = self.process(line_number, raw) {
            self.report(line_number, raw, DiagnosticKind::Malformed(err));
        }
    }

    /// Closes the last pending loop
    pub fn finish(mut self) -> Self {
        self.close_loop();
        self
    }

    fn process(&mut self, line_number: usize, raw: &str) -> Result<()> {
        match line::classify(raw) {
            LineKind::Comment | LineKind::Section => Ok(()),
            LineKind::Variable(declaration) => {
                self.declare(line_number, declaration);
                Ok(())
            }
            LineKind::Content => {
                let substituted = self.variables.substitute(raw);
                let content = ContentLine::split(&substituted);

                if content.depth == 0 {
                    self.open_element(&content)
                } else {
                    self.apply_command(line_number, raw, &content)
                }
            }
        }
    }

    fn declare(&mut self, line_number: usize, declaration: &str) {
        let name = match self.variables.declare(declaration) {
            Some(name) => name.to_string(),
            None => return,
        };

        if let Some(other) = self.variables.overlapping(&name).map(str::to_string) {
            self.report(
                line_number,
                declaration,
                DiagnosticKind::AmbiguousVariable { name, other },
            );
        }
    }

    fn open_element(&mut self, content: &ContentLine<'_>) -> Result<()> {
        self.close_loop();
        self.current = None;

        if let Some(element) = sprite::build(&content.fields, self.config.x_offset())? {
            self.elements.push(element);
            self.current = Some(self.elements.len() - 1);
        }

        Ok(())
    }

    fn apply_command(&mut self, line_number: usize, raw: &str, content: &ContentLine<'_>) -> Result<()> {
        if content.depth == 1 {
            self.close_loop();
        }

        match command::decode(&content.fields, self.config.x_offset())? {
            Command::Ignored => {}
            Command::Loop { start_time, count } => {
                self.close_loop();
                self.open_loop = Some(OpenLoop {
                    line: line_number,
                    text: raw.to_string(),
                    block: LoopBlock::new(start_time, count),
                });
            }
            Command::Animate(animations) => {
                self.attach(line_number, raw, content.depth, animations)
            }
        }

        Ok(())
    }

    fn attach(&mut self, line_number: usize, raw: &str, depth: usize, animations: Vec<Animation>) {
        if animations.is_empty() {
            return;
        }

        match depth {
            2 => {
                if let Some(open) = self.open_loop.as_mut() {
                    open.block.animations.extend(animations);
                    return;
                }
            }
            1 => {
                if let Some(index) = self.current {
                    self.elements[index].animations.extend(animations);
                    return;
                }
            }
            _ => {}
        }

        self.report(line_number, raw, DiagnosticKind::UnattachedCommand { depth });
    }

    /// Unrolls the open loop into the current element
    fn close_loop(&mut self) {
        let open = match self.open_loop.take() {
            Some(open) => open,
            None => return,
        };

        match self.current {
            Some(index) => open.block.unroll_into(&mut self.elements[index].animations),
            None => self.report(open.line, &open.text, DiagnosticKind::DroppedLoop),
        }
    }

    fn report(&mut self, line_number: usize, raw: &str, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(line_number, raw, kind);
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }
}
