use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let a: i64 = args
        .next()
        .context("缺少第一个加数")?
        .parse()
        .context("第一个加数不是整数")?;
    let b: i64 = args
        .next()
        .context("缺少第二个加数")?
        .parse()
        .context("第二个加数不是整数")?;
    println!("{}", adder::add(a, b));
    Ok(())
}
