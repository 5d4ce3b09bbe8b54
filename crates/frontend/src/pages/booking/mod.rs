use catalog::booking::{is_today_or_later, is_valid_phone, reference_code, BookingForm, BookingPayload};
use chrono::NaiveDate;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Google Apps Script web app bound to the bookings spreadsheet.
///
/// Apps Script blocks CORS reads from browser fetches, so the POST runs in
/// no-cors mode and the opaque response is discarded: the submission is
/// fire-and-forget and success is shown optimistically.
const APPS_SCRIPT_WEBAPP_URL: &str =
    "https://script.google.com/macros/s/AKfycbzQm3vG8dTn5LwYh2pRk6XaUe9jC4oNsB1fED7HiJVKxWgyT/exec";

/// Today's date in the visitor's timezone.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

async fn send_booking(payload: &BookingPayload) -> Result<(), String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;

    // Apps Script reads e.postData.contents even for text/plain bodies.
    gloo_net::http::Request::post(APPS_SCRIPT_WEBAPP_URL)
        .mode(web_sys::RequestMode::NoCors)
        .header("Content-Type", "text/plain;charset=utf-8")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let form = RwSignal::new(BookingForm::default());
    let (submitted, set_submitted) = signal(false);
    let (sending, set_sending) = signal(false);
    let (success_code, set_success_code) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let can_submit = Memo::new(move |_| form.get().validate(today()).is_ok());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let current = form.get_untracked();
        if current.is_bot() {
            // Honeypot hit; drop silently.
            return;
        }
        if let Err(message) = current.validate(today()) {
            set_error.set(Some(message));
            return;
        }

        let payload = BookingPayload::from_form(&current, now_iso());
        let code = reference_code(js_sys::Date::now() as i64);

        set_sending.set(true);
        spawn_local(async move {
            match send_booking(&payload).await {
                Ok(()) => {
                    set_success_code.set(code);
                    set_submitted.set(true);
                    form.set(BookingForm::default());
                }
                Err(e) => {
                    log::error!("booking submit failed: {e}");
                    set_error.set(Some("Gửi đặt lịch thất bại. Vui lòng thử lại.".to_string()));
                }
            }
            set_sending.set(false);
        });
    };

    let book_again = move |_| {
        set_submitted.set(false);
        set_error.set(None);
        set_success_code.set(String::new());
    };

    view! {
        <div class="page page--booking">
            <section class="page-banner page-banner--booking">
                <h1 class="page-banner__title">"Đặt Lịch Tham Quan"</h1>
                <p class="page-banner__subtitle">
                    "Hãy đến trực tiếp vườn để trải nghiệm và chọn lựa cây mai ưng ý"
                </p>
            </section>

            <div class="booking-layout">
                <div class="booking-side">
                    <div class="booking-side__card">
                        <h3 class="booking-side__heading">"Thông Tin Vườn"</h3>
                        <div class="booking-side__item">
                            <p class="booking-side__label">"📍 Địa Chỉ"</p>
                            <p>"56 Đường 882, P. Long Trường, Thành phố Hồ Chí Minh"</p>
                        </div>
                        <div class="booking-side__item">
                            <p class="booking-side__label">"⏰ Giờ Làm Việc"</p>
                            <p>"Hàng ngày: 7:00 - 18:00"</p>
                        </div>
                    </div>

                    <div class="booking-side__tips">
                        <p class="booking-side__label">"💡 Gợi Ý Cho Bạn"</p>
                        <ul>
                            <li>
                                "Nên đến vườn vào buổi sáng để chọn mai trong điều kiện ánh sáng tốt nhất."
                            </li>
                            <li>
                                "Mang theo ảnh không gian đặt mai để được tư vấn kích thước phù hợp."
                            </li>
                            <li>"Đội ngũ chuyên gia luôn sẵn sàng hỗ trợ bạn tại vườn."</li>
                        </ul>
                    </div>
                </div>

                <div class="booking-card">
                    {move || {
                        if submitted.get() {
                            view! {
                                <div class="booking-success">
                                    <div class="booking-success__mark">"✓"</div>
                                    <h4 class="booking-success__title">"Đặt Lịch Thành Công!"</h4>
                                    <p>
                                        "Chúng tôi đã nhận được yêu cầu của bạn. Đội ngũ sẽ liên hệ xác nhận trong thời gian sớm nhất."
                                    </p>
                                    {(!success_code.get().is_empty())
                                        .then(|| {
                                            view! {
                                                <p class="booking-success__code">
                                                    "Mã lịch hẹn (tạm thời): " <b>{success_code.get()}</b>
                                                </p>
                                            }
                                        })}
                                    <button class="booking-success__again" on:click=book_again>
                                        "Đặt một lịch hẹn khác"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <h3 class="booking-card__heading">"Thông Tin Đặt Lịch"</h3>
                                <form class="booking-form" on:submit=submit>
                                    // Honeypot; humans never see it, bots tend to fill it.
                                    <input
                                        type="text"
                                        class="booking-form__trap"
                                        tabindex="-1"
                                        autocomplete="off"
                                        aria-hidden="true"
                                        prop:value=move || form.get().website
                                        on:input=move |ev| {
                                            form.update(|f| f.website = event_target_value(&ev))
                                        }
                                    />

                                    <div class="booking-form__field">
                                        <label>"Họ và Tên " <span class="booking-form__req">"*"</span></label>
                                        <input
                                            type="text"
                                            placeholder="Nguyễn Văn A"
                                            prop:value=move || form.get().name
                                            on:input=move |ev| {
                                                form.update(|f| f.name = event_target_value(&ev))
                                            }
                                        />
                                    </div>

                                    <div class="booking-form__field">
                                        <label>
                                            "Số Điện Thoại " <span class="booking-form__req">"*"</span>
                                        </label>
                                        <input
                                            type="tel"
                                            placeholder="090 123 4567"
                                            prop:value=move || form.get().phone
                                            on:input=move |ev| {
                                                form.update(|f| f.phone = event_target_value(&ev))
                                            }
                                        />
                                        {move || {
                                            let phone = form.get().phone;
                                            (!phone.is_empty() && !is_valid_phone(&phone))
                                                .then(|| {
                                                    view! {
                                                        <p class="booking-form__hint">
                                                            "SĐT phải có 10 số (0xxxxxxxxx) hoặc +84xxxxxxxxx."
                                                        </p>
                                                    }
                                                })
                                        }}
                                    </div>

                                    <div class="booking-form__field">
                                        <label>"Email"</label>
                                        <input
                                            type="email"
                                            placeholder="email@example.com"
                                            prop:value=move || form.get().email
                                            on:input=move |ev| {
                                                form.update(|f| f.email = event_target_value(&ev))
                                            }
                                        />
                                    </div>

                                    <div class="booking-form__pair">
                                        <div class="booking-form__field">
                                            <label>
                                                "Ngày Tham Quan " <span class="booking-form__req">"*"</span>
                                            </label>
                                            <input
                                                type="date"
                                                prop:value=move || form.get().date
                                                on:input=move |ev| {
                                                    form.update(|f| f.date = event_target_value(&ev))
                                                }
                                            />
                                            {move || {
                                                let date = form.get().date;
                                                (!date.is_empty() && !is_today_or_later(&date, today()))
                                                    .then(|| {
                                                        view! {
                                                            <p class="booking-form__hint">
                                                                "Ngày tham quan phải từ hôm nay trở đi."
                                                            </p>
                                                        }
                                                    })
                                            }}
                                        </div>

                                        <div class="booking-form__field">
                                            <label>
                                                "Giờ Hẹn " <span class="booking-form__req">"*"</span>
                                            </label>
                                            <input
                                                type="time"
                                                prop:value=move || form.get().time
                                                on:input=move |ev| {
                                                    form.update(|f| f.time = event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                    </div>

                                    <div class="booking-form__field">
                                        <label>"Ghi Chú"</label>
                                        <textarea
                                            placeholder="Nhu cầu cụ thể của bạn..."
                                            prop:value=move || form.get().note
                                            on:input=move |ev| {
                                                form.update(|f| f.note = event_target_value(&ev))
                                            }
                                        ></textarea>
                                    </div>

                                    {move || {
                                        error
                                            .get()
                                            .map(|message| {
                                                view! { <p class="booking-form__error">{message}</p> }
                                            })
                                    }}

                                    <button
                                        type="submit"
                                        class="btn btn--accent btn--block"
                                        disabled=move || sending.get() || !can_submit.get()
                                    >
                                        {move || {
                                            if sending.get() {
                                                "Đang gửi..."
                                            } else {
                                                "Xác Nhận Đặt Lịch Hẹn"
                                            }
                                        }}
                                    </button>

                                    <p class="booking-form__terms">
                                        "Bằng việc đặt lịch, bạn đồng ý với các điều khoản dịch vụ của chúng tôi."
                                    </p>
                                </form>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
