pub fn hash(password: &str) -> anyhow::Result<()> {
    let hash = gymdesk::password::hash_password(password)?;
    println!("{hash}");

    Ok(())
}
