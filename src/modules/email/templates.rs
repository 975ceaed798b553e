use crate::modules::store::EmailKind;

/// Subject line for each notification kind
pub fn subject_for(kind: EmailKind) -> &'static str {
    match kind {
        EmailKind::Otp => "Your verification code",
        EmailKind::Reset => "Password reset request",
    }
}

/// Render the plain-text body for a notification.
///
/// The payload is the OTP code or the full reset link, depending on kind.
pub fn render_body(payload: &str, kind: EmailKind) -> String {
    match kind {
        EmailKind::Otp => format!(
            "Hello,\n\
            \n\
            Your one-time verification code is:\n\
            \n\
            {}\n\
            \n\
            The code expires shortly. If you did not request it, please \
            ignore this email and ensure your account is secure.\n\
            \n\
            Best regards,\n\
            The Account Security Team",
            payload
        ),
        EmailKind::Reset => format!(
            "Hello,\n\
            \n\
            A password reset was requested for your account.\n\
            \n\
            To reset your password, open the following link:\n\
            \n\
            {}\n\
            \n\
            Security Tips:\n\
            - Choose a strong password with at least 8 characters\n\
            - Include uppercase and lowercase letters\n\
            - Include numbers and special characters\n\
            \n\
            If you did not request this reset, please ignore this email \
            and ensure your account is secure.\n\
            \n\
            Best regards,\n\
            The Account Security Team",
            payload
        ),
    }
}
