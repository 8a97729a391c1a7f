mod seed;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    autochain_observability::init();

    let mut state = seed::demo_state()?;
    tracing::info!(
        batches = state.ledger().len(),
        recipes = state.bom().len(),
        "demo state seeded"
    );

    // Run one full cycle through the engine.
    let purchase = state
        .procure(
            "Borneo Coal & Mineral",
            "Bijih Besi (Iron Ore)",
            100.0,
            "Gudang A (Inbound)",
        )
        .context("procurement")?;

    let production = state
        .manufacture(&purchase.batch_id, 100.0)
        .context("manufacturing")?;

    state
        .sell(
            "Toyota Manufacturing",
            &production.produced_batch_id,
            production.output_quantity,
        )
        .context("sales")?;

    println!("== Stock summary ==");
    println!("{}", serde_json::to_string_pretty(&state.stock_summary())?);

    println!("== Ledger ==");
    println!("{}", serde_json::to_string_pretty(state.ledger().all())?);

    println!("== Trace: {} ==", purchase.batch_id);
    let report = state.trace(purchase.batch_id.as_str());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
