use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Cell, Col, Row, Table};

use crate::model::OddsRow;

pub fn tabulate(rows: &[OddsRow]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12))),
            Col::new(Styles::default().with(MinWidth(8))),
            Col::new(Styles::default().with(MinWidth(10))),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Player".into(), "Win %".into(), "Moneyline".into()],
        ));
    for row in rows {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                Cell::new(Styles::default(), row.player.clone().into()),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{:.2}", row.win_percentage).into(),
                ),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{}", row.moneyline).into(),
                ),
            ],
        ));
    }
    table
}
