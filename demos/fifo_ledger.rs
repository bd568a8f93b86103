//! FIFO 計價示例

use tracing_subscriber::EnvFilter;
use warehouse_ledger::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== FIFO 計價示例 ===\n");

    let category = Category::new("五金".to_string());
    let section = category.new_section("A-01".to_string());

    let date = |d: u32| NaiveDate::from_ymd_opt(2025, 11, d).ok_or_else(|| anyhow::anyhow!("無效的日期"));

    let item = Item::new("BOLT-M10".to_string(), 10, Decimal::from(5), date(1)?)
        .with_name("六角螺栓 M10".to_string())
        .with_section_id(section.id);

    let vouchers = vec![
        Voucher::inbound(item.id, "IN-001".to_string(), 5, Decimal::from(7), date(3)?),
        Voucher::inbound(item.id, "IN-002".to_string(), 5, Decimal::from(9), date(5)?),
        Voucher::outbound(item.id, "OUT-001".to_string(), 12, Decimal::from(6), date(8)?)
            .with_note("產線領料".to_string()),
    ];

    let engine = LedgerEngine::new(LedgerConfig::new().with_validate_vouchers(true));

    let position = engine.position(&item, &vouchers);
    println!("結存: 數量 {}, 金額 {}", position.quantity, position.value);

    let statement = engine.statement(&item, &vouchers)?;
    println!("\n明細帳:");
    for line in &statement.lines {
        println!(
            "  - {} {} 入 {} 出 {} FIFO 成本 {} 結存 {}",
            line.voucher_date,
            line.voucher_code,
            line.in_quantity,
            line.out_quantity,
            line.fifo_cost,
            line.balance_quantity
        );
    }

    let quote = engine.price_outbound(&item, &vouchers, 4)?;
    println!("\n再出庫 4 的 FIFO 報價:");
    for batch in &quote.batches {
        println!("  - {} × {}", batch.quantity, batch.unit_price);
    }
    println!("  合計 {}", quote.total_cost);

    Ok(())
}
