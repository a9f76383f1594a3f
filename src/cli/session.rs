use gymdesk_session::SessionCodec;

pub fn issue(config: &gymdesk::Config, sub: String, role: String) -> anyhow::Result<()> {
    let codec = SessionCodec::new(&config.session.secret, config.session.lifetime())?;
    let issued = codec.issue(sub, role)?;

    tracing::info!(sub = %issued.payload.sub, exp = issued.payload.exp, "session token issued");
    println!("{}", issued.token);

    Ok(())
}
