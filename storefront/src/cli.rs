//! Terminal front end
//!
//! Stands in for the browser: each input line is one user interaction,
//! translated to a [`UiEvent`] and dispatched to the page root.

use std::io::{BufRead, Write};

use shared::models::FormData;
use shared::money::format_brl;
use thiserror::Error;

use crate::cart::{CartRender, CartSurface, ControlTarget};
use crate::handoff::LinkOpener;
use crate::page::{Reaction, Storefront, UiEvent};
use crate::widgets::{Display, InputMode, ScrollAction, pickers::format_time};

pub const HELP: &str = "\
comandos:
  menu                      lista o cardápio (respeita o filtro ativo)
  add <item>                adiciona um item ao carrinho
  inc|dec|del <item>        botões da linha do carrinho
  clear                     limpa o carrinho
  checkout                  envia o pedido pelo WhatsApp
  filter <categoria|all>    filtra o cardápio
  nav                       abre/fecha o menu de navegação
  goto <#ancora>            rola até a seção
  reserve k=v;k=v;...       envia a reserva (nome, telefone, data, hora, pessoas, mensagem)
  horarios                  horários disponíveis para reserva
  cart                      mostra o carrinho
  help | quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Event(UiEvent),
    ShowMenu,
    ShowCart,
    ShowTimes,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("comando desconhecido: '{0}' (digite help)")]
    Unknown(String),

    #[error("'{0}' precisa de um argumento")]
    MissingArgument(&'static str),
}

impl CliCommand {
    /// Parse a line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(v, r)| (v, r.trim()));

        let require = |name: &'static str| -> Result<String, ParseError> {
            if rest.is_empty() {
                Err(ParseError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match verb {
            "menu" => CliCommand::ShowMenu,
            "cart" => CliCommand::ShowCart,
            "horarios" => CliCommand::ShowTimes,
            "help" => CliCommand::Help,
            "quit" | "exit" => CliCommand::Quit,
            "add" => CliCommand::Event(UiEvent::AddToCart {
                item: require("add")?,
            }),
            "inc" | "dec" | "del" => {
                let name = require("inc/dec/del")?;
                CliCommand::Event(UiEvent::CartClick(Some(ControlTarget::new(verb, name))))
            }
            "clear" => CliCommand::Event(UiEvent::ClearCart),
            "checkout" => CliCommand::Event(UiEvent::Checkout),
            "filter" => CliCommand::Event(UiEvent::FilterClicked {
                key: require("filter")?,
            }),
            "nav" => CliCommand::Event(UiEvent::ToggleNav),
            "goto" => CliCommand::Event(UiEvent::AnchorClicked {
                href: require("goto")?,
            }),
            "reserve" => CliCommand::Event(UiEvent::SubmitReservation(parse_form(rest))),
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// `nome=Ana; telefone=11999999999; ...` → form data, in order
pub fn parse_form(input: &str) -> FormData {
    input
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect()
}

/// How the cart region is printed after each refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
    /// Cart region markup, as the page would show it
    Html,
}

/// Cart region rendered to a terminal
pub struct TerminalSurface<W: Write> {
    out: W,
    format: RenderFormat,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, format: RenderFormat) -> Self {
        Self { out, format }
    }
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout(format: RenderFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> CartSurface for TerminalSurface<W> {
    fn present(&mut self, render: &CartRender) {
        let result = match self.format {
            RenderFormat::Text => write!(self.out, "{}", render.to_text()),
            RenderFormat::Html => write!(self.out, "{}", render.region_html()),
            RenderFormat::Json => match serde_json::to_string(render) {
                Ok(json) => writeln!(self.out, "{}", json),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize cart render");
                    return;
                }
            },
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write cart");
        }
    }
}

/// Read commands until EOF or `quit`
pub fn run_session<S, O, R, W>(
    page: &mut Storefront<S, O>,
    input: R,
    mut out: W,
) -> std::io::Result<()>
where
    S: CartSurface,
    O: LinkOpener,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match CliCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            CliCommand::Quit => break,
            CliCommand::Help => writeln!(out, "{}", HELP)?,
            CliCommand::ShowMenu => print_menu(page, &mut out)?,
            CliCommand::ShowCart => {
                let render = crate::cart::CartView::render(page.cart());
                write!(out, "{}", render.to_text())?;
            }
            CliCommand::ShowTimes => match page.pickers().time.picker() {
                Some(options) => {
                    let slots: Vec<String> =
                        options.slots().into_iter().map(format_time).collect();
                    writeln!(out, "{}", slots.join(" "))?;
                }
                None => writeln!(out, "(horário livre, digite HH:MM)")?,
            },
            CliCommand::Event(event) => {
                let reaction = page.handle(event);
                print_reaction(&reaction, &mut out)?;
            }
        }
    }
    Ok(())
}

fn print_menu<S: CartSurface, O: LinkOpener, W: Write>(
    page: &Storefront<S, O>,
    out: &mut W,
) -> std::io::Result<()> {
    let active = page.filter().active();
    writeln!(out, "cardápio [{}]", active)?;
    for item in page.menu().items() {
        if active != crate::widgets::FILTER_ALL && !item.has_category(active) {
            continue;
        }
        writeln!(
            out,
            "  {:<24} {:>12}  ({})",
            item.name,
            format_brl(item.price),
            item.categories.join(", ")
        )?;
    }
    if let InputMode::Picker(date) = &page.pickers().date {
        writeln!(
            out,
            "reservas a partir de {}",
            crate::widgets::pickers::format_date(date.min_date)
        )?;
    }
    Ok(())
}

fn print_reaction<W: Write>(reaction: &Reaction, out: &mut W) -> std::io::Result<()> {
    match reaction {
        Reaction::Ignored | Reaction::CartRefreshed | Reaction::LinkOpened(_) => Ok(()),
        Reaction::Feedback(text) => writeln!(out, "{}", text),
        Reaction::NavToggled { open } => {
            writeln!(out, "menu {}", if *open { "aberto" } else { "fechado" })
        }
        Reaction::Filtered(displays) => {
            let shown: Vec<&str> = displays
                .iter()
                .filter(|d| d.display == Display::Grid)
                .map(|d| d.name.as_str())
                .collect();
            writeln!(out, "visíveis: {}", shown.join(", "))
        }
        Reaction::Scroll(ScrollAction::SmoothScroll { target }) => {
            writeln!(out, "rolando até #{}", target)
        }
        Reaction::Scroll(_) => Ok(()),
        Reaction::Revealed(targets) => writeln!(out, "revelados: {}", targets.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{FIELD_NAME, FIELD_PHONE};

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(CliCommand::parse("   "), Ok(None));
        assert_eq!(
            CliCommand::parse("dance"),
            Err(ParseError::Unknown("dance".into()))
        );
        assert_eq!(
            CliCommand::parse("add"),
            Err(ParseError::MissingArgument("add"))
        );
    }

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(
            CliCommand::parse("add Pizza Calabresa"),
            Ok(Some(CliCommand::Event(UiEvent::AddToCart {
                item: "Pizza Calabresa".into()
            })))
        );
        assert_eq!(
            CliCommand::parse("dec  Soda"),
            Ok(Some(CliCommand::Event(UiEvent::CartClick(Some(
                ControlTarget::new("dec", "Soda")
            )))))
        );
        assert_eq!(
            CliCommand::parse("checkout"),
            Ok(Some(CliCommand::Event(UiEvent::Checkout)))
        );
    }

    #[test]
    fn test_parse_form() {
        let form = parse_form("nome = Ana ; telefone=11999999999; lixo ;data=");
        assert_eq!(form.get(FIELD_NAME), Some("Ana"));
        assert_eq!(form.get(FIELD_PHONE), Some("11999999999"));
        assert_eq!(form.get("data"), Some(""));
        assert_eq!(form.get("lixo"), None);
    }

    #[test]
    fn test_terminal_surface_json() {
        let render = crate::cart::CartView::render(&crate::cart::CartStore::new());
        let mut buf = Vec::new();
        TerminalSurface::new(&mut buf, RenderFormat::Json).present(&render);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total"], "R$ 0,00");
        assert_eq!(value["checkout_enabled"], false);
    }

    #[test]
    fn test_terminal_surface_html() {
        let mut store = crate::cart::CartStore::new();
        store.add_item("Pizza", shared::Decimal::new(45, 0)).unwrap();
        let render = crate::cart::CartView::render(&store);

        let mut buf = Vec::new();
        TerminalSurface::new(&mut buf, RenderFormat::Html).present(&render);
        let html = String::from_utf8(buf).unwrap();
        assert!(html.starts_with("<div id=\"cartItems\">"));
        assert!(html.contains("data-name=\"Pizza\""));
        assert!(html.contains("<span id=\"cartTotal\">R$ 45,00</span>"));
    }
}
