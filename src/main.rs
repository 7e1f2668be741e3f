use clap::Parser;
use sparkle_inquiry::utils::logger::{self, LogFormat};
use sparkle_inquiry::utils::validation::Validate;
use sparkle_inquiry::{
    CliConfig, ConfiguredOutbound, InquiryField, InquiryForm, SubmitOutcome, TracingNotifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    // 載入並驗證配置
    let config = match cli.form_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Form config: {:?}", config);
    }

    let kind = config.kind();
    if cli.list_services {
        for service in kind.services() {
            println!("{}", service);
        }
        return Ok(());
    }

    let messages = config.messages();
    let outbound = ConfiguredOutbound::from_config(&config)?;
    let form = InquiryForm::with_messages(kind, outbound, TracingNotifier, messages.clone());

    // 依照表單順序填入欄位：service 必須先於 otherService
    form.update_field(InquiryField::Name, cli.name);
    form.update_field(InquiryField::Email, cli.email);
    form.update_field(InquiryField::Phone, cli.phone);
    form.update_field(InquiryField::Service, cli.service);
    form.update_field(InquiryField::OtherService, cli.other_service);
    form.update_field(InquiryField::Message, cli.message);

    println!("⏳ {}", kind.submitting_label());

    match form.submit().await {
        SubmitOutcome::Sent => {
            println!("✅ {}", messages.success);
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("❌ {}: {}", field, message);
            }
            std::process::exit(2);
        }
        SubmitOutcome::Failed { reason } => {
            tracing::error!("❌ Submission failed: {}", reason);
            eprintln!("❌ {}", messages.error);
            std::process::exit(1);
        }
        SubmitOutcome::Ignored => {
            tracing::warn!("Submission ignored: another one is in flight");
        }
    }

    Ok(())
}
